//! Treatment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blank_as_none, TreatmentType};

/// A treatment performed on a patient. Immutable once logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    /// Sequential ID, unique within the treatment collection
    pub id: u32,
    /// Owning patient
    pub patient_id: u32,
    /// Kind of treatment
    pub treatment_type: TreatmentType,
    /// What was done
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    /// Fee charged, always positive
    pub fee: f64,
    /// Day the treatment was performed
    pub date: NaiveDate,
    /// Clinical notes
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
    /// Treating dentist
    pub dentist_name: String,
}

impl Treatment {
    /// Whether the treatment falls within an inclusive date range.
    pub fn is_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

/// Input for logging a treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTreatment {
    pub patient_id: u32,
    pub treatment_type: TreatmentType,
    pub description: Option<String>,
    pub fee: f64,
    pub date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewTreatment {
    /// Create treatment input with the required fields.
    pub fn new(patient_id: u32, treatment_type: TreatmentType, fee: f64, date: NaiveDate) -> Self {
        Self {
            patient_id,
            treatment_type,
            description: None,
            fee,
            date: Some(date),
            notes: None,
        }
    }

    /// Create treatment input pre-filled with the catalog's average fee.
    pub fn with_suggested_fee(patient_id: u32, treatment_type: TreatmentType, date: NaiveDate) -> Self {
        Self::new(patient_id, treatment_type, treatment_type.average_fee(), date)
    }
}

/// Treatment list filter. Present criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatmentFilter {
    pub treatment_type: Option<TreatmentType>,
    pub date: Option<NaiveDate>,
}

impl TreatmentFilter {
    /// Check a treatment against every present criterion.
    pub fn accepts(&self, treatment: &Treatment) -> bool {
        self.treatment_type
            .map_or(true, |t| treatment.treatment_type == t)
            && self.date.map_or(true, |d| treatment.date == d)
    }
}
