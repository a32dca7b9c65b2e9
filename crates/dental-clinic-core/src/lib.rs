//! Dental Clinic Core Library
//!
//! Local-first patient, treatment, appointment and revenue management for a small dental
//! clinic. A UI layer calls into this crate; rendering, charts and document layout stay on the
//! UI side.
//!
//! # Architecture
//!
//! ```text
//!                     UI events
//!                         │
//!      ┌──────────────────┼──────────────────┐
//!      ▼                  ▼                  ▼
//! PatientService   TreatmentService   AppointmentService
//!      │                  │                  │
//!      └──────────────────┼──────────────────┘
//!                         ▼
//!          ┌───────────────────────────────┐
//!          │  Store::transact              │
//!          │  apply to copy → persist →    │
//!          │  swap in                      │
//!          └───────────────┬───────────────┘
//!                          │
//!               ┌──────────┴──────────┐
//!               ▼                     ▼
//!            Reports               Exporter
//!     (dashboard, earnings)   (patients, treatments,
//!                                  earnings)
//! ```
//!
//! # Core Principle
//!
//! **Every mutation is all-or-nothing.** Validation runs before anything changes, and a failed
//! write leaves the in-memory state exactly as it was.
//!
//! # Modules
//!
//! - [`db`]: SQLite document table, one JSON document per collection
//! - [`models`]: Domain types (Patient, Treatment, Appointment, TreatmentType)
//! - [`store`]: Repository store with load/save and default seeding
//! - [`services`]: Patient, treatment and appointment operations
//! - [`report`]: Dashboard, revenue series and earnings reports
//! - [`export`]: Patients, treatments and earnings report export

pub mod clinic;
pub mod config;
pub mod db;
pub mod export;
pub mod models;
pub mod report;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use clinic::Clinic;
pub use config::{ClinicConfig, ConfigError};
pub use db::Database;
pub use export::{DateRange, ExportBody, ExportDocument, Exporter, ReportKind};
pub use models::{
    Appointment, AppointmentStatus, CatalogEntry, NewAppointment, NewPatient, NewTreatment,
    Patient, PatientUpdate, Treatment, TreatmentFilter, TreatmentType,
};
pub use report::{
    DashboardSummary, EarningsMode, EarningsReport, EarningsSummary, Reports, RevenuePoint,
    TypeBreakdown, TypeCount,
};
pub use services::{
    AppointmentService, CascadeSummary, PatientService, ServiceError, ServiceResult,
    TreatmentService,
};
pub use store::{Store, StoreError, StoreResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<StoreError> for ClinicError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Json(_) => ClinicError::SerializationError(e.to_string()),
            _ => ClinicError::DatabaseError(e.to_string()),
        }
    }
}

impl From<ServiceError> for ClinicError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(message) => ClinicError::InvalidInput(message),
            ServiceError::NotFound { .. } => ClinicError::NotFound(e.to_string()),
            ServiceError::Persistence(inner) => inner.into(),
        }
    }
}

impl From<ConfigError> for ClinicError {
    fn from(e: ConfigError) -> Self {
        ClinicError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(e: serde_json::Error) -> Self {
        ClinicError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ClinicError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ClinicError::InvalidInput(format!("Invalid date '{}': {}", value, e)))
}

/// Blank or absent strings mean "no date".
fn parse_optional_date(value: Option<String>) -> Result<Option<NaiveDate>, ClinicError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}

fn parse_optional_treatment_type(
    value: Option<String>,
) -> Result<Option<TreatmentType>, ClinicError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(ClinicError::InvalidInput),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a clinic database at the given path with default settings.
#[uniffi::export]
pub fn open_clinic(path: String) -> Result<Arc<ClinicCore>, ClinicError> {
    open_clinic_with_config(path, FfiClinicConfig::default())
}

/// Open or create a clinic database at the given path.
#[uniffi::export]
pub fn open_clinic_with_config(
    path: String,
    config: FfiClinicConfig,
) -> Result<Arc<ClinicCore>, ClinicError> {
    let clinic = Clinic::open(&path, config.try_into()?)?;
    Ok(Arc::new(ClinicCore::new(clinic)))
}

/// Create an in-memory clinic (for testing).
#[uniffi::export]
pub fn open_clinic_in_memory() -> Result<Arc<ClinicCore>, ClinicError> {
    let clinic = Clinic::open_in_memory(ClinicConfig::default())?;
    Ok(Arc::new(ClinicCore::new(clinic)))
}

/// The treatment type catalog.
#[uniffi::export]
pub fn treatment_catalog() -> Vec<FfiCatalogEntry> {
    TreatmentType::catalog().into_iter().map(Into::into).collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe clinic wrapper for FFI.
#[derive(uniffi::Object)]
pub struct ClinicCore {
    clinic: Arc<Mutex<Clinic>>,
}

impl ClinicCore {
    fn new(clinic: Clinic) -> Self {
        Self {
            clinic: Arc::new(Mutex::new(clinic)),
        }
    }
}

#[uniffi::export]
impl ClinicCore {
    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a new patient.
    pub fn create_patient(&self, patient: FfiNewPatient) -> Result<FfiPatient, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let created = clinic.patients().create(patient.into())?;
        Ok(created.into())
    }

    /// Edit an existing patient.
    pub fn update_patient(
        &self,
        id: u32,
        changes: FfiPatientUpdate,
    ) -> Result<FfiPatient, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let updated = clinic.patients().update(id, changes.into())?;
        Ok(updated.into())
    }

    /// Delete a patient with all their treatments and appointments.
    pub fn delete_patient(&self, id: u32) -> Result<FfiCascadeSummary, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let summary = clinic.patients().delete(id)?;
        Ok(summary.into())
    }

    /// Get a patient by ID.
    pub fn get_patient(&self, id: u32) -> Result<Option<FfiPatient>, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.patients().get(id).map(Into::into))
    }

    /// All patients in registration order.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let patients = clinic.patients().list();
        Ok(patients.into_iter().map(Into::into).collect())
    }

    /// Search patients by name or phone. An empty term lists everyone.
    pub fn search_patients(&self, term: String) -> Result<Vec<FfiPatient>, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let patients = clinic.patients().search(&term);
        Ok(patients.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Treatment Operations
    // =========================================================================

    /// Log a treatment.
    pub fn create_treatment(
        &self,
        treatment: FfiNewTreatment,
    ) -> Result<FfiTreatment, ClinicError> {
        let input = treatment.try_into()?;
        let mut clinic = self.clinic.lock()?;
        let created = clinic.treatments().create(input)?;
        Ok(created.into())
    }

    /// Delete a treatment.
    pub fn delete_treatment(&self, id: u32) -> Result<(), ClinicError> {
        let mut clinic = self.clinic.lock()?;
        clinic.treatments().delete(id)?;
        Ok(())
    }

    /// List treatments, optionally filtered by type name and/or exact date.
    pub fn filter_treatments(
        &self,
        treatment_type: Option<String>,
        date: Option<String>,
    ) -> Result<Vec<FfiTreatment>, ClinicError> {
        let filter = TreatmentFilter {
            treatment_type: parse_optional_treatment_type(treatment_type)?,
            date: parse_optional_date(date)?,
        };
        let mut clinic = self.clinic.lock()?;
        let treatments = clinic.treatments().filter(&filter);
        Ok(treatments.into_iter().map(Into::into).collect())
    }

    /// Treatment history of one patient.
    pub fn patient_treatments(&self, patient_id: u32) -> Result<Vec<FfiTreatment>, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let treatments = clinic.treatments().for_patient(patient_id);
        Ok(treatments.into_iter().map(Into::into).collect())
    }

    /// Revenue for a single day.
    pub fn daily_revenue(&self, date: String) -> Result<f64, ClinicError> {
        let date = parse_date(&date)?;
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.treatments().daily_revenue(date))
    }

    /// Revenue for a calendar month.
    pub fn month_revenue(&self, year: i32, month: u32) -> Result<f64, ClinicError> {
        if !(1..=12).contains(&month) {
            return Err(ClinicError::InvalidInput(format!("Invalid month: {}", month)));
        }
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.treatments().month_revenue(year, month))
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Book an appointment.
    pub fn create_appointment(
        &self,
        appointment: FfiNewAppointment,
    ) -> Result<FfiAppointment, ClinicError> {
        let input = appointment.try_into()?;
        let mut clinic = self.clinic.lock()?;
        let created = clinic.appointments().create(input)?;
        Ok(created.into())
    }

    /// Mark an appointment completed. Returns false if it already was.
    pub fn complete_appointment(&self, id: u32) -> Result<bool, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        Ok(clinic.appointments().complete(id)?)
    }

    /// Delete an appointment.
    pub fn delete_appointment(&self, id: u32) -> Result<(), ClinicError> {
        let mut clinic = self.clinic.lock()?;
        clinic.appointments().delete(id)?;
        Ok(())
    }

    /// All appointments in booking order.
    pub fn list_appointments(&self) -> Result<Vec<FfiAppointment>, ClinicError> {
        let mut clinic = self.clinic.lock()?;
        let appointments = clinic.appointments().list();
        Ok(appointments.into_iter().map(Into::into).collect())
    }

    /// Scheduled appointments on or after a date (today if absent), soonest first.
    pub fn upcoming_appointments(
        &self,
        from: Option<String>,
    ) -> Result<Vec<FfiAppointment>, ClinicError> {
        let from = parse_optional_date(from)?.unwrap_or_else(today);
        let mut clinic = self.clinic.lock()?;
        let appointments = clinic.appointments().upcoming(from);
        Ok(appointments.into_iter().map(Into::into).collect())
    }

    // =========================================================================
    // Reporting Operations
    // =========================================================================

    /// Headline dashboard numbers for today.
    pub fn dashboard_summary(&self) -> Result<FfiDashboardSummary, ClinicError> {
        let clinic = self.clinic.lock()?;
        Ok(clinic.reports().dashboard_summary(today()).into())
    }

    /// Daily revenue for the last `days` days ending today, or the configured count if absent.
    pub fn revenue_series(&self, days: Option<u32>) -> Result<Vec<FfiRevenuePoint>, ClinicError> {
        if days == Some(0) {
            return Err(ClinicError::InvalidInput("days must be at least 1".into()));
        }
        let clinic = self.clinic.lock()?;
        let days = days.unwrap_or_else(|| clinic.store().config().revenue_series_days());
        let series = clinic.reports().revenue_series(today(), days);
        Ok(series.into_iter().map(Into::into).collect())
    }

    /// Treatment counts per type.
    pub fn treatment_type_distribution(&self) -> Result<Vec<FfiTypeCount>, ClinicError> {
        let clinic = self.clinic.lock()?;
        let counts = clinic.reports().treatment_type_distribution();
        Ok(counts.into_iter().map(Into::into).collect())
    }

    /// Earnings for "daily", "weekly" or "monthly" around a date (today if absent).
    pub fn earnings_report(
        &self,
        mode: String,
        reference_date: Option<String>,
    ) -> Result<FfiEarningsReport, ClinicError> {
        let mode: EarningsMode = mode.parse().map_err(ClinicError::InvalidInput)?;
        let reference = parse_optional_date(reference_date)?.unwrap_or_else(today);
        let clinic = self.clinic.lock()?;
        Ok(clinic.reports().earnings_report(mode, reference).into())
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export a report as JSON. Dates bound the report only when both are given.
    pub fn export_report_json(
        &self,
        kind: String,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<String, ClinicError> {
        let document = self.export_document(kind, start_date, end_date)?;
        Ok(document.to_json()?)
    }

    /// Export a report as CSV. Dates bound the report only when both are given.
    pub fn export_report_csv(
        &self,
        kind: String,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<String, ClinicError> {
        let document = self.export_document(kind, start_date, end_date)?;
        Ok(document.to_csv())
    }

    /// Page layout of a report: entry index ranges sized by the configured page size.
    pub fn export_pages(
        &self,
        kind: String,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<Vec<FfiPageRange>, ClinicError> {
        let document = self.export_document(kind, start_date, end_date)?;
        Ok(document.pages.into_iter().map(Into::into).collect())
    }
}

impl ClinicCore {
    fn export_document(
        &self,
        kind: String,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Result<ExportDocument, ClinicError> {
        let kind: ReportKind = kind.parse().map_err(ClinicError::InvalidInput)?;
        let period =
            DateRange::from_bounds(parse_optional_date(start_date)?, parse_optional_date(end_date)?);
        let clinic = self.clinic.lock()?;
        Ok(clinic.exporter().export(kind, period))
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe configuration.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiClinicConfig {
    pub dentist_name: String,
    pub seed_defaults: bool,
    pub revenue_series_days: u32,
    pub export_page_size: u32,
}

impl Default for FfiClinicConfig {
    fn default() -> Self {
        let config = ClinicConfig::default();
        Self {
            dentist_name: config.dentist_name().to_string(),
            seed_defaults: config.seed_defaults(),
            revenue_series_days: config.revenue_series_days(),
            export_page_size: config.export_page_size() as u32,
        }
    }
}

impl TryFrom<FfiClinicConfig> for ClinicConfig {
    type Error = ConfigError;

    fn try_from(config: FfiClinicConfig) -> Result<Self, Self::Error> {
        ClinicConfig::new(
            config.dentist_name,
            config.seed_defaults,
            config.revenue_series_days,
            config.export_page_size as usize,
        )
    }
}

/// FFI-safe catalog entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCatalogEntry {
    pub name: String,
    pub average_fee: f64,
}

impl From<CatalogEntry> for FfiCatalogEntry {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name,
            average_fee: entry.average_fee,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub medical_history: Option<String>,
    pub created_date: String,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            phone: patient.phone,
            email: patient.email,
            address: patient.address,
            age: patient.age,
            medical_history: patient.medical_history,
            created_date: patient.created_date.to_string(),
        }
    }
}

/// FFI-safe patient registration input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewPatient {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub medical_history: Option<String>,
}

impl From<FfiNewPatient> for NewPatient {
    fn from(patient: FfiNewPatient) -> Self {
        NewPatient {
            name: patient.name,
            phone: patient.phone,
            email: patient.email,
            address: patient.address,
            age: patient.age,
            medical_history: patient.medical_history,
        }
    }
}

/// FFI-safe patient edit.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub medical_history: Option<String>,
}

impl From<FfiPatientUpdate> for PatientUpdate {
    fn from(update: FfiPatientUpdate) -> Self {
        PatientUpdate {
            name: update.name,
            phone: update.phone,
            email: update.email,
            address: update.address,
            age: update.age,
            medical_history: update.medical_history,
        }
    }
}

/// FFI-safe cascade result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiCascadeSummary {
    pub treatments_removed: u32,
    pub appointments_removed: u32,
}

impl From<CascadeSummary> for FfiCascadeSummary {
    fn from(summary: CascadeSummary) -> Self {
        Self {
            treatments_removed: summary.treatments_removed as u32,
            appointments_removed: summary.appointments_removed as u32,
        }
    }
}

/// FFI-safe treatment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTreatment {
    pub id: u32,
    pub patient_id: u32,
    pub treatment_type: String,
    pub description: Option<String>,
    pub fee: f64,
    pub date: String,
    pub notes: Option<String>,
    pub dentist_name: String,
}

impl From<Treatment> for FfiTreatment {
    fn from(treatment: Treatment) -> Self {
        Self {
            id: treatment.id,
            patient_id: treatment.patient_id,
            treatment_type: treatment.treatment_type.name().to_string(),
            description: treatment.description,
            fee: treatment.fee,
            date: treatment.date.to_string(),
            notes: treatment.notes,
            dentist_name: treatment.dentist_name,
        }
    }
}

/// FFI-safe treatment input. `fee` is optional only so a cleared form field can be reported;
/// a missing fee is rejected. Use [`treatment_catalog`] to pre-fill it.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewTreatment {
    pub patient_id: u32,
    pub treatment_type: String,
    pub description: Option<String>,
    pub fee: Option<f64>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<FfiNewTreatment> for NewTreatment {
    type Error = ClinicError;

    fn try_from(treatment: FfiNewTreatment) -> Result<Self, Self::Error> {
        let treatment_type: TreatmentType = treatment
            .treatment_type
            .parse()
            .map_err(ClinicError::InvalidInput)?;
        Ok(NewTreatment {
            patient_id: treatment.patient_id,
            treatment_type,
            description: treatment.description,
            fee: treatment
                .fee
                .ok_or_else(|| ClinicError::InvalidInput("fee is required".into()))?,
            date: parse_optional_date(treatment.date)?,
            notes: treatment.notes,
        })
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: u32,
    pub patient_id: u32,
    pub date: String,
    pub time: String,
    pub treatment_type: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_id: appointment.patient_id,
            date: appointment.date.to_string(),
            time: appointment.time,
            treatment_type: appointment.treatment_type.map(|t| t.name().to_string()),
            notes: appointment.notes,
            status: appointment.status.as_str().to_string(),
        }
    }
}

/// FFI-safe appointment input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewAppointment {
    pub patient_id: u32,
    pub date: Option<String>,
    pub time: String,
    pub treatment_type: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<FfiNewAppointment> for NewAppointment {
    type Error = ClinicError;

    fn try_from(appointment: FfiNewAppointment) -> Result<Self, Self::Error> {
        Ok(NewAppointment {
            patient_id: appointment.patient_id,
            date: parse_optional_date(appointment.date)?,
            time: appointment.time,
            treatment_type: parse_optional_treatment_type(appointment.treatment_type)?,
            notes: appointment.notes,
        })
    }
}

/// FFI-safe dashboard summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboardSummary {
    pub patient_count: u32,
    pub today_treatment_count: u32,
    pub today_revenue: f64,
    pub month_revenue: f64,
}

impl From<DashboardSummary> for FfiDashboardSummary {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            patient_count: summary.patient_count as u32,
            today_treatment_count: summary.today_treatment_count as u32,
            today_revenue: summary.today_revenue,
            month_revenue: summary.month_revenue,
        }
    }
}

/// FFI-safe revenue chart point.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRevenuePoint {
    pub date: String,
    pub label: String,
    pub amount: f64,
}

impl From<RevenuePoint> for FfiRevenuePoint {
    fn from(point: RevenuePoint) -> Self {
        Self {
            date: point.date.to_string(),
            label: point.label,
            amount: point.amount,
        }
    }
}

/// FFI-safe treatment type count.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTypeCount {
    pub treatment_type: String,
    pub count: u32,
}

impl From<TypeCount> for FfiTypeCount {
    fn from(count: TypeCount) -> Self {
        Self {
            treatment_type: count.treatment_type.name().to_string(),
            count: count.count as u32,
        }
    }
}

/// FFI-safe per-type earnings.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTypeBreakdown {
    pub treatment_type: String,
    pub count: u32,
    pub revenue: f64,
}

impl From<TypeBreakdown> for FfiTypeBreakdown {
    fn from(breakdown: TypeBreakdown) -> Self {
        Self {
            treatment_type: breakdown.treatment_type.name().to_string(),
            count: breakdown.count as u32,
            revenue: breakdown.revenue,
        }
    }
}

/// FFI-safe page of export entries, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiPageRange {
    pub start: u32,
    pub end: u32,
}

impl From<std::ops::Range<usize>> for FfiPageRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start as u32,
            end: range.end as u32,
        }
    }
}

/// FFI-safe earnings report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEarningsReport {
    pub mode: String,
    pub period_start: String,
    pub period_end: String,
    pub period_label: String,
    pub total_revenue: f64,
    pub treatment_count: u32,
    pub average_fee: f64,
    pub by_type: Vec<FfiTypeBreakdown>,
}

impl From<EarningsReport> for FfiEarningsReport {
    fn from(report: EarningsReport) -> Self {
        Self {
            mode: report.mode.as_str().to_string(),
            period_start: report.period_start.to_string(),
            period_end: report.period_end.to_string(),
            period_label: report.period_label,
            total_revenue: report.summary.total_revenue,
            treatment_count: report.summary.treatment_count as u32,
            average_fee: report.summary.average_fee,
            by_type: report.summary.by_type.into_iter().map(Into::into).collect(),
        }
    }
}
