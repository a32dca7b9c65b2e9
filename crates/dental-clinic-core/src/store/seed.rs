//! Sample data written on first run.

use chrono::NaiveDate;

use crate::models::{Patient, Treatment, TreatmentType};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap_or_default()
}

/// Three sample patients.
pub fn default_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "John Smith".into(),
            phone: "+1-555-0101".into(),
            email: Some("john.smith@email.com".into()),
            address: Some("123 Main St, Anytown, ST 12345".into()),
            age: Some(35),
            medical_history: Some("No known allergies, regular checkups".into()),
            created_date: day(20),
        },
        Patient {
            id: 2,
            name: "Sarah Johnson".into(),
            phone: "+1-555-0102".into(),
            email: Some("sarah.j@email.com".into()),
            address: Some("456 Oak Ave, Anytown, ST 12345".into()),
            age: Some(28),
            medical_history: Some("Mild gum sensitivity".into()),
            created_date: day(18),
        },
        Patient {
            id: 3,
            name: "Mike Davis".into(),
            phone: "+1-555-0103".into(),
            email: Some("mike.davis@email.com".into()),
            address: Some("789 Pine St, Anytown, ST 12345".into()),
            age: Some(42),
            medical_history: Some("Previous root canal, diabetes type 2".into()),
            created_date: day(15),
        },
    ]
}

/// Four sample treatments referencing the sample patients.
pub fn default_treatments(dentist_name: &str) -> Vec<Treatment> {
    let treatment = |id, patient_id, treatment_type, description: &str, fee, date, notes: &str| {
        Treatment {
            id,
            patient_id,
            treatment_type,
            description: Some(description.into()),
            fee,
            date,
            notes: Some(notes.into()),
            dentist_name: dentist_name.to_string(),
        }
    };

    vec![
        treatment(
            1,
            1,
            TreatmentType::Cleaning,
            "Regular dental cleaning and checkup",
            120.0,
            day(26),
            "Good oral hygiene, no issues found",
        ),
        treatment(
            2,
            2,
            TreatmentType::Filling,
            "Composite filling for upper left molar",
            180.0,
            day(25),
            "Small cavity filled successfully",
        ),
        treatment(
            3,
            3,
            TreatmentType::Crown,
            "Ceramic crown for damaged tooth",
            850.0,
            day(24),
            "Crown fitted perfectly, patient comfortable",
        ),
        treatment(
            4,
            1,
            TreatmentType::Whitening,
            "Professional teeth whitening treatment",
            300.0,
            day(23),
            "Excellent results, patient very satisfied",
        ),
    ]
}
