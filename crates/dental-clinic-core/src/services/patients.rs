//! Patient registration, edits, cascading deletes and search.

use chrono::{Local, NaiveDate};
use tracing::info;

use super::{require_text, ServiceError, ServiceResult};
use crate::models::{normalize_optional, NewPatient, Patient, PatientUpdate};
use crate::store::{next_id, Store};

/// What a cascading patient delete removed besides the patient itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub treatments_removed: usize,
    pub appointments_removed: usize,
}

/// Patient operations.
pub struct PatientService<'a> {
    store: &'a mut Store,
}

impl<'a> PatientService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Register a patient dated today.
    pub fn create(&mut self, input: NewPatient) -> ServiceResult<Patient> {
        self.create_on(input, Local::now().date_naive())
    }

    /// Register a patient with an explicit registration date.
    pub fn create_on(&mut self, input: NewPatient, created_date: NaiveDate) -> ServiceResult<Patient> {
        let name = require_text(&input.name, "name")?;
        let phone = require_text(&input.phone, "phone")?;

        let patient = self.store.transact(|data| {
            let patient = Patient {
                id: next_id(data.patients.iter().map(|p| p.id)),
                name,
                phone,
                email: normalize_optional(input.email),
                address: normalize_optional(input.address),
                age: input.age.filter(|age| *age > 0),
                medical_history: normalize_optional(input.medical_history),
                created_date,
            };
            data.patients.push(patient.clone());
            Ok::<_, ServiceError>(patient)
        })?;

        info!(patient_id = patient.id, "Patient registered");
        Ok(patient)
    }

    /// Merge supplied fields over an existing patient. `id` and `created_date` never change.
    pub fn update(&mut self, id: u32, changes: PatientUpdate) -> ServiceResult<Patient> {
        let name = changes
            .name
            .as_deref()
            .map(|n| require_text(n, "name"))
            .transpose()?;
        let phone = changes
            .phone
            .as_deref()
            .map(|p| require_text(p, "phone"))
            .transpose()?;

        let patient = self.store.transact(|data| {
            let patient = data
                .patients
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ServiceError::NotFound {
                    entity: "Patient",
                    id,
                })?;

            if let Some(name) = name {
                patient.name = name;
            }
            if let Some(phone) = phone {
                patient.phone = phone;
            }
            if changes.email.is_some() {
                patient.email = normalize_optional(changes.email);
            }
            if changes.address.is_some() {
                patient.address = normalize_optional(changes.address);
            }
            if let Some(age) = changes.age {
                patient.age = Some(age).filter(|age| *age > 0);
            }
            if changes.medical_history.is_some() {
                patient.medical_history = normalize_optional(changes.medical_history);
            }

            Ok::<_, ServiceError>(patient.clone())
        })?;

        info!(patient_id = id, "Patient updated");
        Ok(patient)
    }

    /// Delete a patient together with every treatment and appointment referencing it.
    pub fn delete(&mut self, id: u32) -> ServiceResult<CascadeSummary> {
        let summary = self.store.transact(|data| {
            let before = data.patients.len();
            data.patients.retain(|p| p.id != id);
            if data.patients.len() == before {
                return Err(ServiceError::NotFound {
                    entity: "Patient",
                    id,
                });
            }

            let treatments_before = data.treatments.len();
            data.treatments.retain(|t| t.patient_id != id);

            let appointments_before = data.appointments.len();
            data.appointments.retain(|a| a.patient_id != id);

            Ok(CascadeSummary {
                treatments_removed: treatments_before - data.treatments.len(),
                appointments_removed: appointments_before - data.appointments.len(),
            })
        })?;

        info!(
            patient_id = id,
            treatments_removed = summary.treatments_removed,
            appointments_removed = summary.appointments_removed,
            "Patient deleted"
        );
        Ok(summary)
    }

    /// Get a patient by ID.
    pub fn get(&self, id: u32) -> Option<Patient> {
        self.store.patient(id).cloned()
    }

    /// All patients in registration order.
    pub fn list(&self) -> Vec<Patient> {
        self.store.patients().to_vec()
    }

    /// Patients whose name (case-insensitive) or phone contains `term`, in registration order.
    pub fn search(&self, term: &str) -> Vec<Patient> {
        self.store
            .patients()
            .iter()
            .filter(|p| p.matches(term))
            .cloned()
            .collect()
    }
}
