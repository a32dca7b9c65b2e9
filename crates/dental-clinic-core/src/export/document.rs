//! Export document model and its JSON/CSV renderings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::{DateRange, ReportKind};
use crate::models::TreatmentType;
use crate::report::EarningsSummary;

/// One patient line in a patients report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRow {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// One treatment line in a treatments report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRow {
    pub treatment_type: TreatmentType,
    pub fee: f64,
    /// Patient name, or "Unknown" when the patient no longer exists
    pub patient_name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Report contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportBody {
    Patients(Vec<PatientRow>),
    Treatments(Vec<TreatmentRow>),
    Earnings(EarningsSummary),
}

/// A report ready to hand to a document renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Clinic name for the header
    pub clinic_name: String,
    /// Report kind
    pub kind: ReportKind,
    /// Title, e.g. "Treatments Report"
    pub title: String,
    /// Date bounds applied, if any
    pub period: Option<DateRange>,
    /// Export timestamp
    pub exported_at: String,
    /// Entry index ranges, one per rendered page
    pub pages: Vec<Range<usize>>,
    /// Report contents
    pub body: ExportBody,
}

impl ExportDocument {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        match &self.body {
            ExportBody::Patients(rows) => {
                csv.push_str("name,phone,email,age\n");
                for row in rows {
                    csv.push_str(&format!(
                        "{},{},{},{}\n",
                        escape_csv(&row.name),
                        escape_csv(&row.phone),
                        escape_csv(row.email.as_deref().unwrap_or("")),
                        row.age.map(|a| a.to_string()).unwrap_or_default(),
                    ));
                }
            }
            ExportBody::Treatments(rows) => {
                csv.push_str("treatment_type,fee,patient_name,date,description\n");
                for row in rows {
                    csv.push_str(&format!(
                        "{},{:.2},{},{},{}\n",
                        escape_csv(row.treatment_type.name()),
                        row.fee,
                        escape_csv(&row.patient_name),
                        row.date,
                        escape_csv(row.description.as_deref().unwrap_or("")),
                    ));
                }
            }
            ExportBody::Earnings(summary) => {
                csv.push_str("treatment_type,count,revenue\n");
                for entry in &summary.by_type {
                    csv.push_str(&format!(
                        "{},{},{:.2}\n",
                        escape_csv(entry.treatment_type.name()),
                        entry.count,
                        entry.revenue,
                    ));
                }
                csv.push_str(&format!(
                    "TOTAL,{},{:.2}\n",
                    summary.treatment_count, summary.total_revenue
                ));
            }
        }

        csv
    }

    /// Number of listed entries. An earnings report counts as one block.
    pub fn entry_count(&self) -> usize {
        match &self.body {
            ExportBody::Patients(rows) => rows.len(),
            ExportBody::Treatments(rows) => rows.len(),
            ExportBody::Earnings(_) => 1,
        }
    }

    /// Entry index ranges for each page, `per_page` entries at a time.
    ///
    /// An empty report still has one (empty) page so the header gets rendered.
    pub fn page_ranges(&self, per_page: usize) -> Vec<Range<usize>> {
        let total = self.entry_count();
        let per_page = per_page.max(1);
        if total == 0 {
            return vec![0..0];
        }
        (0..total)
            .step_by(per_page)
            .map(|start| start..(start + per_page).min(total))
            .collect()
    }

    /// Suggested file stem, e.g. "dental_clinic_patients_report".
    pub fn file_name(&self) -> String {
        format!("dental_clinic_{}_report", self.kind.as_str())
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
