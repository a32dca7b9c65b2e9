//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::blank_as_none;

/// A clinic patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Sequential ID, unique within the patient collection
    pub id: u32,
    /// Full name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Email address
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    /// Postal address
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Allergies, conditions, prior work
    #[serde(default, deserialize_with = "blank_as_none")]
    pub medical_history: Option<String>,
    /// Registration date, never changes after creation
    pub created_date: NaiveDate,
}

impl Patient {
    /// Whether the patient matches a search term.
    ///
    /// Name matches case-insensitively, phone matches as a plain substring.
    /// The term is used as typed; only an empty term matches everyone.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}

/// Input for registering a new patient.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub medical_history: Option<String>,
}

impl NewPatient {
    /// Create patient input with the required fields.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }
}

/// Partial edit of an existing patient. `None` keeps the current value.
///
/// Optional fields take `Some(String::new())` to clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub medical_history: Option<String>,
}
