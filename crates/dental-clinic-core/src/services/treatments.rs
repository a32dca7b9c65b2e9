//! Treatment logging, deletion and lookups.

use chrono::NaiveDate;
use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::models::{normalize_optional, NewTreatment, Treatment, TreatmentFilter, TreatmentType};
use crate::report::{in_month, sum_fees};
use crate::store::{next_id, Store};

/// Treatment operations.
pub struct TreatmentService<'a> {
    store: &'a mut Store,
}

impl<'a> TreatmentService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Log a treatment. Requires a patient, a positive fee and a date.
    ///
    /// The patient reference is not checked against the patient collection.
    pub fn create(&mut self, input: NewTreatment) -> ServiceResult<Treatment> {
        if input.patient_id == 0 {
            return Err(ServiceError::validation("patient is required"));
        }
        if !input.fee.is_finite() || input.fee <= 0.0 {
            return Err(ServiceError::validation("fee must be a positive number"));
        }
        let date = input
            .date
            .ok_or_else(|| ServiceError::validation("date is required"))?;
        let dentist_name = self.store.config().dentist_name().to_string();

        let treatment = self.store.transact(|data| {
            let treatment = Treatment {
                id: next_id(data.treatments.iter().map(|t| t.id)),
                patient_id: input.patient_id,
                treatment_type: input.treatment_type,
                description: normalize_optional(input.description),
                fee: input.fee,
                date,
                notes: normalize_optional(input.notes),
                dentist_name,
            };
            data.treatments.push(treatment.clone());
            Ok::<_, ServiceError>(treatment)
        })?;

        info!(
            treatment_id = treatment.id,
            patient_id = treatment.patient_id,
            treatment_type = %treatment.treatment_type,
            "Treatment logged"
        );
        Ok(treatment)
    }

    /// Delete a treatment by ID.
    pub fn delete(&mut self, id: u32) -> ServiceResult<()> {
        self.store.transact(|data| {
            let before = data.treatments.len();
            data.treatments.retain(|t| t.id != id);
            if data.treatments.len() == before {
                return Err(ServiceError::NotFound {
                    entity: "Treatment",
                    id,
                });
            }
            Ok(())
        })?;

        info!(treatment_id = id, "Treatment deleted");
        Ok(())
    }

    /// Get a treatment by ID.
    pub fn get(&self, id: u32) -> Option<Treatment> {
        self.store.treatment(id).cloned()
    }

    /// All treatments in logging order.
    pub fn list(&self) -> Vec<Treatment> {
        self.store.treatments().to_vec()
    }

    /// Treatments matching every present filter criterion.
    pub fn filter(&self, filter: &TreatmentFilter) -> Vec<Treatment> {
        self.store
            .treatments()
            .iter()
            .filter(|t| filter.accepts(t))
            .cloned()
            .collect()
    }

    /// Treatment history of one patient.
    pub fn for_patient(&self, patient_id: u32) -> Vec<Treatment> {
        self.store
            .treatments()
            .iter()
            .filter(|t| t.patient_id == patient_id)
            .cloned()
            .collect()
    }

    /// Total fees of treatments performed on `date`.
    pub fn daily_revenue(&self, date: NaiveDate) -> f64 {
        sum_fees(self.store.treatments().iter().filter(|t| t.date == date))
    }

    /// Total fees of treatments performed in the given calendar month.
    pub fn month_revenue(&self, year: i32, month: u32) -> f64 {
        sum_fees(
            self.store
                .treatments()
                .iter()
                .filter(|t| in_month(t.date, year, month)),
        )
    }

    /// Catalog fee used to pre-fill the treatment form.
    pub fn suggested_fee(treatment_type: TreatmentType) -> f64 {
        treatment_type.average_fee()
    }
}
