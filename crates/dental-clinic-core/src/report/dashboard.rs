//! Dashboard figures and chart series.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{in_month, sum_fees, Reports};
use crate::models::TreatmentType;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Registered patients
    pub patient_count: usize,
    /// Treatments performed today
    pub today_treatment_count: usize,
    /// Fees earned today
    pub today_revenue: f64,
    /// Fees earned in the current calendar month
    pub month_revenue: f64,
}

/// One day in the revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    /// Short label, e.g. "Sep 26"
    pub label: String,
    pub amount: f64,
}

/// Number of treatments of one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub treatment_type: TreatmentType,
    pub count: usize,
}

impl<'a> Reports<'a> {
    /// Patient count plus today's and this month's treatment figures.
    pub fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let treatments = self.treatments();
        let todays: Vec<_> = treatments.iter().filter(|t| t.date == today).collect();

        DashboardSummary {
            patient_count: self.store.patients().len(),
            today_treatment_count: todays.len(),
            today_revenue: sum_fees(todays),
            month_revenue: sum_fees(
                treatments
                    .iter()
                    .filter(|t| in_month(t.date, today.year(), today.month())),
            ),
        }
    }

    /// Daily revenue for the `days` calendar days ending `today`, oldest first.
    ///
    /// Always returns exactly `days` points; days without treatments are zero.
    pub fn revenue_series(&self, today: NaiveDate, days: u32) -> Vec<RevenuePoint> {
        (0..days)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(i64::from(offset));
                RevenuePoint {
                    date,
                    label: date.format("%b %-d").to_string(),
                    amount: sum_fees(self.treatments().iter().filter(|t| t.date == date)),
                }
            })
            .collect()
    }

    /// Treatment counts per type, in the order each type first appears.
    pub fn treatment_type_distribution(&self) -> Vec<TypeCount> {
        let mut counts: Vec<TypeCount> = Vec::new();
        for treatment in self.treatments() {
            match counts
                .iter_mut()
                .find(|c| c.treatment_type == treatment.treatment_type)
            {
                Some(entry) => entry.count += 1,
                None => counts.push(TypeCount {
                    treatment_type: treatment.treatment_type,
                    count: 1,
                }),
            }
        }
        counts
    }
}
