//! The clinic: one store plus the services that operate on it.

use std::path::Path;

use tracing::info;

use crate::config::ClinicConfig;
use crate::db::Database;
use crate::export::Exporter;
use crate::models::{CatalogEntry, TreatmentType};
use crate::report::Reports;
use crate::services::{AppointmentService, PatientService, TreatmentService};
use crate::store::{Store, StoreResult};

/// Owns all clinic state for one UI session.
pub struct Clinic {
    store: Store,
}

impl Clinic {
    /// Open the clinic database at path, creating and seeding it if needed.
    pub fn open<P: AsRef<Path>>(path: P, config: ClinicConfig) -> StoreResult<Self> {
        info!(path = %path.as_ref().display(), "Opening clinic database");
        Self::from_database(Database::open(path)?, config)
    }

    /// Open a throwaway in-memory clinic.
    pub fn open_in_memory(config: ClinicConfig) -> StoreResult<Self> {
        Self::from_database(Database::open_in_memory()?, config)
    }

    /// Load clinic state from an already opened database.
    pub fn from_database(db: Database, config: ClinicConfig) -> StoreResult<Self> {
        Ok(Self {
            store: Store::load(db, config)?,
        })
    }

    pub fn patients(&mut self) -> PatientService<'_> {
        PatientService::new(&mut self.store)
    }

    pub fn treatments(&mut self) -> TreatmentService<'_> {
        TreatmentService::new(&mut self.store)
    }

    pub fn appointments(&mut self) -> AppointmentService<'_> {
        AppointmentService::new(&mut self.store)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(&self.store)
    }

    pub fn exporter(&self) -> Exporter<'_> {
        Exporter::new(&self.store)
    }

    /// Treatment types with their suggested fees.
    pub fn treatment_catalog(&self) -> Vec<CatalogEntry> {
        TreatmentType::catalog()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Persist the current state, e.g. to materialize seeded sample data.
    pub fn save(&mut self) -> StoreResult<()> {
        self.store.save()
    }

    /// Flush state and release the database.
    pub fn close(mut self) -> StoreResult<()> {
        self.store.save()?;
        info!("Clinic closed");
        Ok(())
    }
}
