//! Earnings reports over a day, week or month.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{sum_fees, Reports};
use crate::models::{Treatment, TreatmentType};

/// Reporting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarningsMode {
    /// The reference day only
    Daily,
    /// Sunday through Saturday around the reference day
    Weekly,
    /// The reference day's calendar month
    Monthly,
}

impl EarningsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningsMode::Daily => "daily",
            EarningsMode::Weekly => "weekly",
            EarningsMode::Monthly => "monthly",
        }
    }

    /// Inclusive first and last day of the window containing `reference`.
    pub fn bounds(&self, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            EarningsMode::Daily => (reference, reference),
            EarningsMode::Weekly => week_bounds(reference),
            EarningsMode::Monthly => month_bounds(reference),
        }
    }

    /// Display label for the window, e.g. "Week of Sep 21, 2025".
    pub fn period_label(&self, reference: NaiveDate) -> String {
        match self {
            EarningsMode::Daily => reference.format("%b %-d, %Y").to_string(),
            EarningsMode::Weekly => {
                let (start, _) = week_bounds(reference);
                format!("Week of {}", start.format("%b %-d, %Y"))
            }
            EarningsMode::Monthly => reference.format("%B %Y").to_string(),
        }
    }
}

impl fmt::Display for EarningsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EarningsMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "daily" => Ok(EarningsMode::Daily),
            "weekly" => Ok(EarningsMode::Weekly),
            "monthly" => Ok(EarningsMode::Monthly),
            _ => Err(format!(
                "Invalid earnings mode: '{}'. Must be one of: daily, weekly, monthly",
                value
            )),
        }
    }
}

/// Revenue and count for one treatment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub treatment_type: TreatmentType,
    pub count: usize,
    pub revenue: f64,
}

/// Totals over an arbitrary set of treatments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsSummary {
    pub total_revenue: f64,
    pub treatment_count: usize,
    /// Mean fee, 0 when there are no treatments
    pub average_fee: f64,
    /// Per-type figures in first-seen order
    pub by_type: Vec<TypeBreakdown>,
}

impl EarningsSummary {
    /// Aggregate a set of treatments.
    pub fn from_treatments<'t, I>(treatments: I) -> Self
    where
        I: IntoIterator<Item = &'t Treatment>,
    {
        let treatments: Vec<&Treatment> = treatments.into_iter().collect();
        let total_revenue = sum_fees(treatments.iter().copied());
        let treatment_count = treatments.len();
        let average_fee = if treatment_count > 0 {
            total_revenue / treatment_count as f64
        } else {
            0.0
        };

        let mut by_type: Vec<TypeBreakdown> = Vec::new();
        for treatment in &treatments {
            match by_type
                .iter_mut()
                .find(|b| b.treatment_type == treatment.treatment_type)
            {
                Some(entry) => {
                    entry.count += 1;
                    entry.revenue += treatment.fee;
                }
                None => by_type.push(TypeBreakdown {
                    treatment_type: treatment.treatment_type,
                    count: 1,
                    revenue: treatment.fee,
                }),
            }
        }

        Self {
            total_revenue,
            treatment_count,
            average_fee,
            by_type,
        }
    }
}

/// Earnings for one reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsReport {
    pub mode: EarningsMode,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub period_label: String,
    pub summary: EarningsSummary,
}

impl<'a> Reports<'a> {
    /// Earnings for the day, week or month containing `reference`.
    pub fn earnings_report(&self, mode: EarningsMode, reference: NaiveDate) -> EarningsReport {
        let (period_start, period_end) = mode.bounds(reference);
        let summary = EarningsSummary::from_treatments(
            self.treatments()
                .iter()
                .filter(|t| t.is_between(period_start, period_end)),
        );

        EarningsReport {
            mode,
            period_start,
            period_end,
            period_label: mode.period_label(reference),
            summary,
        }
    }
}

fn week_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(reference.weekday().num_days_from_sunday());
    let start = reference - Duration::days(offset);
    (start, start + Duration::days(6))
}

fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = reference.with_day(1).unwrap_or(reference);
    let next_month = if reference.month() == 12 {
        NaiveDate::from_ymd_opt(reference.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(reference.year(), reference.month() + 1, 1)
    };
    let end = next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(reference);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::db::Database;
    use crate::store::Store;

    fn seeded_store() -> Store {
        Store::load(Database::open_in_memory().unwrap(), ClinicConfig::default()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("daily".parse::<EarningsMode>(), Ok(EarningsMode::Daily));
        assert_eq!(" Weekly".parse::<EarningsMode>(), Ok(EarningsMode::Weekly));
        assert_eq!("MONTHLY".parse::<EarningsMode>(), Ok(EarningsMode::Monthly));
        assert!("yearly".parse::<EarningsMode>().is_err());
    }

    #[test]
    fn test_week_bounds_sunday_to_saturday() {
        // 2025-09-24 is a Wednesday
        assert_eq!(week_bounds(date(2025, 9, 24)), (date(2025, 9, 21), date(2025, 9, 27)));
        // Sunday starts its own week
        assert_eq!(week_bounds(date(2025, 9, 21)), (date(2025, 9, 21), date(2025, 9, 27)));
        // Saturday ends it
        assert_eq!(week_bounds(date(2025, 9, 27)), (date(2025, 9, 21), date(2025, 9, 27)));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(date(2025, 9, 15)), (date(2025, 9, 1), date(2025, 9, 30)));
        assert_eq!(month_bounds(date(2025, 12, 31)), (date(2025, 12, 1), date(2025, 12, 31)));
        assert_eq!(month_bounds(date(2024, 2, 10)), (date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_period_labels() {
        let reference = date(2025, 9, 24);
        assert_eq!(EarningsMode::Daily.period_label(reference), "Sep 24, 2025");
        assert_eq!(EarningsMode::Weekly.period_label(reference), "Week of Sep 21, 2025");
        assert_eq!(EarningsMode::Monthly.period_label(reference), "September 2025");
    }

    #[test]
    fn test_daily_report() {
        let store = seeded_store();
        let report = Reports::new(&store).earnings_report(EarningsMode::Daily, date(2025, 9, 26));

        assert_eq!(report.summary.total_revenue, 120.0);
        assert_eq!(report.summary.treatment_count, 1);
        assert_eq!(report.summary.average_fee, 120.0);
        assert_eq!(report.summary.by_type.len(), 1);
        assert_eq!(report.summary.by_type[0].treatment_type, TreatmentType::Cleaning);
    }

    #[test]
    fn test_weekly_report() {
        let store = seeded_store();
        // Week of Sep 21 through Sep 27 holds all four seed treatments
        let report = Reports::new(&store).earnings_report(EarningsMode::Weekly, date(2025, 9, 24));

        assert_eq!(report.period_start, date(2025, 9, 21));
        assert_eq!(report.period_end, date(2025, 9, 27));
        assert_eq!(report.summary.treatment_count, 4);
        assert_eq!(report.summary.total_revenue, 1450.0);
        assert_eq!(report.summary.average_fee, 362.5);
    }

    #[test]
    fn test_monthly_report_empty() {
        let store = seeded_store();
        let report = Reports::new(&store).earnings_report(EarningsMode::Monthly, date(2025, 8, 15));

        assert_eq!(report.summary.total_revenue, 0.0);
        assert_eq!(report.summary.treatment_count, 0);
        assert_eq!(report.summary.average_fee, 0.0);
        assert!(report.summary.by_type.is_empty());
    }

    #[test]
    fn test_breakdown_accumulates_per_type() {
        let day = date(2025, 9, 1);
        let make = |id, treatment_type, fee| Treatment {
            id,
            patient_id: 1,
            treatment_type,
            description: None,
            fee,
            date: day,
            notes: None,
            dentist_name: "Dr. Anderson".into(),
        };
        let treatments = vec![
            make(1, TreatmentType::Crown, 850.0),
            make(2, TreatmentType::Cleaning, 120.0),
            make(3, TreatmentType::Crown, 900.0),
        ];

        let summary = EarningsSummary::from_treatments(&treatments);
        assert_eq!(summary.by_type.len(), 2);
        assert_eq!(summary.by_type[0].treatment_type, TreatmentType::Crown);
        assert_eq!(summary.by_type[0].count, 2);
        assert_eq!(summary.by_type[0].revenue, 1750.0);
        assert_eq!(summary.by_type[1].revenue, 120.0);
    }
}
