//! Reporting engine: dashboard figures, revenue series and earnings reports.
//!
//! All reports are computed on demand from the store's treatment collection. Functions take
//! the reference date explicitly so results do not depend on the wall clock.

mod dashboard;
mod earnings;

pub use dashboard::*;
pub use earnings::*;

use chrono::{Datelike, NaiveDate};

use crate::models::Treatment;
use crate::store::Store;

/// Sum of fees over a set of treatments.
pub fn sum_fees<'t, I>(treatments: I) -> f64
where
    I: IntoIterator<Item = &'t Treatment>,
{
    treatments.into_iter().map(|t| t.fee).sum()
}

/// Whether a date lies in the given calendar month.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Read-only reporting over a store.
pub struct Reports<'a> {
    store: &'a Store,
}

impl<'a> Reports<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    fn treatments(&self) -> &'a [Treatment] {
        self.store.treatments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreatmentType;

    fn make_treatment(fee: f64, date: NaiveDate) -> Treatment {
        Treatment {
            id: 1,
            patient_id: 1,
            treatment_type: TreatmentType::Cleaning,
            description: None,
            fee,
            date,
            notes: None,
            dentist_name: "Dr. Anderson".into(),
        }
    }

    #[test]
    fn test_sum_fees() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
        let treatments = vec![make_treatment(120.0, day), make_treatment(80.5, day)];
        assert_eq!(sum_fees(&treatments), 200.5);
        assert_eq!(sum_fees(&Vec::<Treatment>::new()), 0.0);
    }

    #[test]
    fn test_in_month() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap();
        assert!(in_month(day, 2025, 9));
        assert!(!in_month(day, 2025, 10));
        assert!(!in_month(day, 2024, 9));
    }
}
