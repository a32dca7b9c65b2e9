//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{blank_as_none, TreatmentType};

/// Appointment lifecycle. The only transition is `Scheduled -> Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked, not yet seen
    #[default]
    Scheduled,
    /// Patient was seen
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
        }
    }
}

/// A booked visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Sequential ID, unique within the appointment collection
    pub id: u32,
    /// Patient being seen
    pub patient_id: u32,
    /// Day of the visit
    pub date: NaiveDate,
    /// Time of day, free-form (e.g. "14:30")
    pub time: String,
    /// Planned treatment, if known
    #[serde(default, deserialize_with = "blank_as_none")]
    pub treatment_type: Option<TreatmentType>,
    /// Booking notes
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
    /// Lifecycle status
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_completed(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }
}

/// Input for booking an appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub patient_id: u32,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub treatment_type: Option<TreatmentType>,
    pub notes: Option<String>,
}

impl NewAppointment {
    /// Create appointment input with the required fields.
    pub fn new(patient_id: u32, date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            patient_id,
            date: Some(date),
            time: time.into(),
            ..Default::default()
        }
    }
}
