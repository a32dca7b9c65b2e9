//! Report export for patients, treatments and earnings.

mod document;

pub use document::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::report::EarningsSummary;
use crate::store::Store;

/// Clinic name printed on exported reports unless overridden.
pub const DEFAULT_CLINIC_NAME: &str = "Dental Care Clinic";

/// Which report to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Patients,
    Treatments,
    Earnings,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Patients => "patients",
            ReportKind::Treatments => "treatments",
            ReportKind::Earnings => "earnings",
        }
    }

    /// Report title, e.g. "Earnings Report".
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Patients => "Patients Report",
            ReportKind::Treatments => "Treatments Report",
            ReportKind::Earnings => "Earnings Report",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "patients" => Ok(ReportKind::Patients),
            "treatments" => Ok(ReportKind::Treatments),
            "earnings" => Ok(ReportKind::Earnings),
            _ => Err(format!(
                "Invalid report type: '{}'. Must be one of: patients, treatments, earnings",
                value
            )),
        }
    }
}

/// Inclusive date bounds for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range only when both bounds are given.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Builds export documents from the store.
pub struct Exporter<'a> {
    store: &'a Store,
    page_size: usize,
}

impl<'a> Exporter<'a> {
    /// Create a new exporter paginating with the store's configured page size.
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            page_size: store.config().export_page_size(),
        }
    }

    /// Export one report, optionally bounded to a date range.
    ///
    /// Patients are bounded by registration date, treatments and earnings by treatment date.
    pub fn export(&self, kind: ReportKind, period: Option<DateRange>) -> ExportDocument {
        let in_period = |date: NaiveDate| period.map_or(true, |range| range.contains(date));

        let body = match kind {
            ReportKind::Patients => ExportBody::Patients(
                self.store
                    .patients()
                    .iter()
                    .filter(|p| in_period(p.created_date))
                    .map(|p| PatientRow {
                        name: p.name.clone(),
                        phone: p.phone.clone(),
                        email: p.email.clone(),
                        age: p.age,
                    })
                    .collect(),
            ),
            ReportKind::Treatments => ExportBody::Treatments(
                self.store
                    .treatments()
                    .iter()
                    .filter(|t| in_period(t.date))
                    .map(|t| TreatmentRow {
                        treatment_type: t.treatment_type,
                        fee: t.fee,
                        patient_name: self
                            .store
                            .patient_name(t.patient_id)
                            .unwrap_or("Unknown")
                            .to_string(),
                        date: t.date,
                        description: t.description.clone(),
                    })
                    .collect(),
            ),
            ReportKind::Earnings => ExportBody::Earnings(EarningsSummary::from_treatments(
                self.store.treatments().iter().filter(|t| in_period(t.date)),
            )),
        };

        let mut document = ExportDocument {
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
            kind,
            title: kind.title().to_string(),
            period,
            exported_at: chrono::Utc::now().to_rfc3339(),
            pages: Vec::new(),
            body,
        };
        document.pages = document.page_ranges(self.page_size);
        document
    }
}
