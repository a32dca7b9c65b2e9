//! Repository store: owns the three entity collections and their persistence.
//!
//! Each collection is persisted as one JSON document keyed by collection name. Mutations go
//! through [`Store::transact`], which applies changes to a copy, writes the copy, and only then
//! swaps it in, so a failed write never leaves memory and storage out of step.

mod seed;

pub use seed::*;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::ClinicConfig;
use crate::db::{Database, DbError};
use crate::models::{Appointment, Patient, Treatment};

/// Document key for the patient collection.
pub const PATIENTS_KEY: &str = "dentalPatients";
/// Document key for the treatment collection.
pub const TREATMENTS_KEY: &str = "dentalTreatments";
/// Document key for the appointment collection.
pub const APPOINTMENTS_KEY: &str = "dentalAppointments";

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt document '{key}': {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The three entity collections, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub patients: Vec<Patient>,
    pub treatments: Vec<Treatment>,
    pub appointments: Vec<Appointment>,
}

/// Next sequential ID: one past the current maximum, or 1 for an empty collection.
pub fn next_id<I: IntoIterator<Item = u32>>(ids: I) -> u32 {
    ids.into_iter().max().map_or(1, |max| max + 1)
}

/// Single owner of all clinic state.
pub struct Store {
    db: Database,
    config: ClinicConfig,
    data: Collections,
}

impl Store {
    /// Load every collection from the database.
    ///
    /// A collection that was never saved is seeded with sample data when the configuration asks
    /// for it. A saved empty list stays empty.
    pub fn load(db: Database, config: ClinicConfig) -> StoreResult<Self> {
        let seed = config.seed_defaults();

        let patients = load_collection(&db, PATIENTS_KEY, seed, default_patients)?;
        let treatments = load_collection(&db, TREATMENTS_KEY, seed, || {
            default_treatments(config.dentist_name())
        })?;
        let appointments = load_collection(&db, APPOINTMENTS_KEY, seed, Vec::new)?;

        debug!(
            patients = patients.len(),
            treatments = treatments.len(),
            appointments = appointments.len(),
            "Loaded clinic collections"
        );

        Ok(Self {
            db,
            config,
            data: Collections {
                patients,
                treatments,
                appointments,
            },
        })
    }

    /// Write all three collections, replacing whatever was stored.
    pub fn save(&mut self) -> StoreResult<()> {
        let documents = encode(&self.data)?;
        self.db.put_documents(&documents)?;
        debug!("Saved clinic collections");
        Ok(())
    }

    /// Apply a mutation atomically.
    ///
    /// `apply` works on a copy of the collections. If it fails, nothing changes. If it succeeds,
    /// the copy is persisted and becomes the current state; a persistence failure also leaves
    /// the current state untouched.
    pub fn transact<T, E, F>(&mut self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut Collections) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut next = self.data.clone();
        let output = apply(&mut next)?;

        let documents = encode(&next).map_err(E::from)?;
        self.db
            .put_documents(&documents)
            .map_err(|e| E::from(StoreError::from(e)))?;

        self.data = next;
        Ok(output)
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn collections(&self) -> &Collections {
        &self.data
    }

    pub fn patients(&self) -> &[Patient] {
        &self.data.patients
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.data.treatments
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.data.appointments
    }

    pub fn patient(&self, id: u32) -> Option<&Patient> {
        self.data.patients.iter().find(|p| p.id == id)
    }

    pub fn treatment(&self, id: u32) -> Option<&Treatment> {
        self.data.treatments.iter().find(|t| t.id == id)
    }

    pub fn appointment(&self, id: u32) -> Option<&Appointment> {
        self.data.appointments.iter().find(|a| a.id == id)
    }

    /// Display name of a patient, if the patient still exists.
    pub fn patient_name(&self, id: u32) -> Option<&str> {
        self.patient(id).map(|p| p.name.as_str())
    }

    /// Get the underlying database.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn load_collection<T, F>(db: &Database, key: &str, seed: bool, defaults: F) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    match db.get_document(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| {
            error!(key, error = %source, "Persisted collection is not readable");
            StoreError::Corrupt {
                key: key.to_string(),
                source,
            }
        }),
        None if seed => {
            warn!(key, "No saved collection, seeding sample data");
            Ok(defaults())
        }
        None => Ok(Vec::new()),
    }
}

fn encode(data: &Collections) -> StoreResult<[(&'static str, String); 3]> {
    Ok([
        (PATIENTS_KEY, serde_json::to_string(&data.patients)?),
        (TREATMENTS_KEY, serde_json::to_string(&data.treatments)?),
        (APPOINTMENTS_KEY, serde_json::to_string(&data.appointments)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveDate;

    fn setup_store() -> Store {
        Store::load(Database::open_in_memory().unwrap(), ClinicConfig::default()).unwrap()
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(Vec::<u32>::new()), 1);
        assert_eq!(next_id(vec![1, 2, 3]), 4);
        assert_eq!(next_id(vec![7, 2]), 8);
    }

    #[test]
    fn test_seeds_when_never_saved() {
        let store = setup_store();
        assert_eq!(store.patients().len(), 3);
        assert_eq!(store.treatments().len(), 4);
        assert_eq!(store.appointments().len(), 0);
    }

    #[test]
    fn test_no_seed_when_disabled() {
        let config = ClinicConfig::default().with_seed_defaults(false);
        let store = Store::load(Database::open_in_memory().unwrap(), config).unwrap();
        assert!(store.patients().is_empty());
        assert!(store.treatments().is_empty());
    }

    #[test]
    fn test_saved_empty_list_not_reseeded() {
        let db = Database::open_in_memory().unwrap();
        db.put_document(PATIENTS_KEY, "[]").unwrap();

        let store = Store::load(db, ClinicConfig::default()).unwrap();
        assert!(store.patients().is_empty());
        // Treatments were never saved, so they still get sample data
        assert_eq!(store.treatments().len(), 4);
    }

    #[test]
    fn test_corrupt_document_fails_load() {
        let db = Database::open_in_memory().unwrap();
        db.put_document(TREATMENTS_KEY, r#"[{"id":"one"}]"#).unwrap();

        let result = Store::load(db, ClinicConfig::default());
        match result {
            Err(StoreError::Corrupt { key, .. }) => assert_eq!(key, TREATMENTS_KEY),
            other => panic!("expected corrupt error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_save_writes_all_documents() {
        let mut store = setup_store();
        store.save().unwrap();

        let keys = store.database().list_document_keys().unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(
            store.database().get_document(APPOINTMENTS_KEY).unwrap(),
            Some("[]".into())
        );
    }

    #[test]
    fn test_transact_failure_leaves_state() {
        let mut store = setup_store();
        let before = store.collections().clone();

        let result: Result<(), StoreError> = store.transact(|data| {
            data.patients.clear();
            Err(StoreError::Database(DbError::Sqlite(
                rusqlite::Error::InvalidQuery,
            )))
        });

        assert!(result.is_err());
        assert_eq!(store.collections(), &before);
        assert!(store.database().list_document_keys().unwrap().is_empty());
    }

    #[test]
    fn test_transact_commits_and_persists() {
        let mut store = setup_store();

        let added: Result<u32, StoreError> = store.transact(|data| {
            let id = next_id(data.appointments.iter().map(|a| a.id));
            data.appointments.push(Appointment {
                id,
                patient_id: 1,
                date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                time: "10:00".into(),
                treatment_type: None,
                notes: None,
                status: AppointmentStatus::Scheduled,
            });
            Ok(id)
        });

        assert_eq!(added.unwrap(), 1);
        assert_eq!(store.appointments().len(), 1);

        let raw = store.database().get_document(APPOINTMENTS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"patientId\":1"));
        assert!(raw.contains("\"status\":\"scheduled\""));
    }

    #[test]
    fn test_patient_name_lookup() {
        let store = setup_store();
        assert_eq!(store.patient_name(2), Some("Sarah Johnson"));
        assert_eq!(store.patient_name(99), None);
    }
}
