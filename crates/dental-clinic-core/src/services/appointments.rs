//! Appointment booking and completion.

use chrono::NaiveDate;
use tracing::info;

use super::{require_text, ServiceError, ServiceResult};
use crate::models::{normalize_optional, Appointment, AppointmentStatus, NewAppointment};
use crate::store::{next_id, Store};

/// Appointment operations.
pub struct AppointmentService<'a> {
    store: &'a mut Store,
}

impl<'a> AppointmentService<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Book an appointment. Requires a patient, a date and a time.
    pub fn create(&mut self, input: NewAppointment) -> ServiceResult<Appointment> {
        if input.patient_id == 0 {
            return Err(ServiceError::validation("patient is required"));
        }
        let date = input
            .date
            .ok_or_else(|| ServiceError::validation("date is required"))?;
        let time = require_text(&input.time, "time")?;

        let appointment = self.store.transact(|data| {
            let appointment = Appointment {
                id: next_id(data.appointments.iter().map(|a| a.id)),
                patient_id: input.patient_id,
                date,
                time,
                treatment_type: input.treatment_type,
                notes: normalize_optional(input.notes),
                status: AppointmentStatus::Scheduled,
            };
            data.appointments.push(appointment.clone());
            Ok::<_, ServiceError>(appointment)
        })?;

        info!(
            appointment_id = appointment.id,
            patient_id = appointment.patient_id,
            "Appointment scheduled"
        );
        Ok(appointment)
    }

    /// Mark an appointment completed.
    ///
    /// Returns `false` without touching storage when it was already completed.
    pub fn complete(&mut self, id: u32) -> ServiceResult<bool> {
        let appointment = self.store.appointment(id).ok_or(ServiceError::NotFound {
            entity: "Appointment",
            id,
        })?;
        if appointment.is_completed() {
            return Ok(false);
        }

        self.store.transact(|data| {
            if let Some(appointment) = data.appointments.iter_mut().find(|a| a.id == id) {
                appointment.status = AppointmentStatus::Completed;
            }
            Ok::<_, ServiceError>(())
        })?;

        info!(appointment_id = id, "Appointment completed");
        Ok(true)
    }

    /// Delete an appointment by ID.
    pub fn delete(&mut self, id: u32) -> ServiceResult<()> {
        self.store.transact(|data| {
            let before = data.appointments.len();
            data.appointments.retain(|a| a.id != id);
            if data.appointments.len() == before {
                return Err(ServiceError::NotFound {
                    entity: "Appointment",
                    id,
                });
            }
            Ok(())
        })?;

        info!(appointment_id = id, "Appointment deleted");
        Ok(())
    }

    /// Get an appointment by ID.
    pub fn get(&self, id: u32) -> Option<Appointment> {
        self.store.appointment(id).cloned()
    }

    /// All appointments in booking order.
    pub fn list(&self) -> Vec<Appointment> {
        self.store.appointments().to_vec()
    }

    /// Scheduled appointments on or after `from`, soonest first.
    pub fn upcoming(&self, from: NaiveDate) -> Vec<Appointment> {
        let mut upcoming: Vec<Appointment> = self
            .store
            .appointments()
            .iter()
            .filter(|a| !a.is_completed() && a.date >= from)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        upcoming
    }
}
