//! Reporting and export tests over the seeded sample clinic, plus the FFI facade.

use chrono::NaiveDate;
use dental_clinic_core::{
    open_clinic, open_clinic_in_memory, open_clinic_with_config, treatment_catalog, Clinic,
    ClinicConfig, ClinicError, DateRange, EarningsMode, ExportBody, FfiClinicConfig,
    FfiNewPatient, FfiNewTreatment, FfiPageRange, FfiPatientUpdate, NewTreatment, ReportKind,
    TreatmentType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_clinic() -> Clinic {
    Clinic::open_in_memory(ClinicConfig::default()).unwrap()
}

#[test]
fn test_daily_earnings_for_sample_data() {
    let clinic = sample_clinic();
    let report = clinic
        .reports()
        .earnings_report(EarningsMode::Daily, date(2025, 9, 26));

    assert_eq!(report.summary.total_revenue, 120.0);
    assert_eq!(report.summary.treatment_count, 1);
    assert_eq!(report.summary.average_fee, 120.0);
    assert_eq!(report.period_label, "Sep 26, 2025");
}

#[test]
fn test_month_revenue_sums_whole_month() {
    let mut clinic = sample_clinic();
    clinic
        .treatments()
        .create(NewTreatment::new(2, TreatmentType::Extraction, 250.0, date(2025, 10, 1)))
        .unwrap();

    assert_eq!(clinic.treatments().month_revenue(2025, 9), 1450.0);
    assert_eq!(clinic.treatments().month_revenue(2025, 10), 250.0);

    let monthly = clinic
        .reports()
        .earnings_report(EarningsMode::Monthly, date(2025, 9, 3));
    assert_eq!(monthly.summary.total_revenue, 1450.0);
    assert_eq!(monthly.period_label, "September 2025");
}

#[test]
fn test_dashboard_summary_for_sample_day() {
    let clinic = sample_clinic();
    let summary = clinic.reports().dashboard_summary(date(2025, 9, 25));

    assert_eq!(summary.patient_count, 3);
    assert_eq!(summary.today_treatment_count, 1);
    assert_eq!(summary.today_revenue, 180.0);
    assert_eq!(summary.month_revenue, 1450.0);
}

#[test]
fn test_revenue_series_covers_requested_days() {
    let clinic = sample_clinic();
    let series = clinic.reports().revenue_series(date(2025, 9, 26), 7);

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, date(2025, 9, 20));
    assert_eq!(series[6].label, "Sep 26");
    let amounts: Vec<f64> = series.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![0.0, 0.0, 0.0, 300.0, 850.0, 180.0, 120.0]);
}

#[test]
fn test_distribution_reflects_deletes() {
    let mut clinic = sample_clinic();
    clinic.treatments().delete(4).unwrap();

    let distribution = clinic.reports().treatment_type_distribution();
    let types: Vec<TreatmentType> = distribution.iter().map(|c| c.treatment_type).collect();
    assert_eq!(
        types,
        vec![TreatmentType::Cleaning, TreatmentType::Filling, TreatmentType::Crown]
    );
}

#[test]
fn test_treatment_export_after_patient_cascade() {
    let mut clinic = sample_clinic();
    clinic.patients().delete(1).unwrap();

    let document = clinic.exporter().export(ReportKind::Treatments, None);
    match &document.body {
        ExportBody::Treatments(rows) => {
            let names: Vec<&str> = rows.iter().map(|r| r.patient_name.as_str()).collect();
            assert_eq!(names, vec!["Sarah Johnson", "Mike Davis"]);
        }
        other => panic!("unexpected body: {:?}", other),
    }
}

#[test]
fn test_export_pages_use_configured_size() {
    let clinic = sample_clinic();
    let document = clinic.exporter().export(ReportKind::Treatments, None);

    assert_eq!(clinic.store().config().export_page_size(), 5);
    assert_eq!(document.pages, vec![0..4]);
    assert_eq!(document.file_name(), "dental_clinic_treatments_report");
}

#[test]
fn test_earnings_export_range() {
    let clinic = sample_clinic();
    let range = DateRange::new(date(2025, 9, 23), date(2025, 9, 24));
    let csv = clinic
        .exporter()
        .export(ReportKind::Earnings, Some(range))
        .to_csv();

    assert!(csv.starts_with("treatment_type,count,revenue\n"));
    assert!(csv.contains("Crown,1,850.00\n"));
    assert!(csv.contains("Whitening,1,300.00\n"));
    assert!(csv.ends_with("TOTAL,2,1150.00\n"));
}

// =========================================================================
// FFI facade
// =========================================================================

#[test]
fn test_ffi_catalog() {
    let catalog = treatment_catalog();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog[3].name, "Root Canal");
    assert_eq!(catalog[3].average_fee, 1200.0);
}

#[test]
fn test_ffi_patient_lifecycle() {
    let core = open_clinic_in_memory().unwrap();

    let created = core
        .create_patient(FfiNewPatient {
            name: "Noah King".into(),
            phone: "555-0400".into(),
            email: Some("noah@example.com".into()),
            address: None,
            age: Some(41),
            medical_history: None,
        })
        .unwrap();
    assert_eq!(created.id, 4);

    let updated = core
        .update_patient(
            created.id,
            FfiPatientUpdate {
                name: None,
                phone: Some("555-0401".into()),
                email: Some(String::new()),
                address: None,
                age: None,
                medical_history: None,
            },
        )
        .unwrap();
    assert_eq!(updated.phone, "555-0401");
    assert_eq!(updated.email, None);
    assert_eq!(updated.age, Some(41));

    assert_eq!(core.search_patients("noah".into()).unwrap().len(), 1);

    let summary = core.delete_patient(1).unwrap();
    assert_eq!(summary.treatments_removed, 2);
    assert!(core.get_patient(1).unwrap().is_none());
}

#[test]
fn test_ffi_treatment_create_and_errors() {
    let core = open_clinic_in_memory().unwrap();

    let created = core
        .create_treatment(FfiNewTreatment {
            patient_id: 2,
            treatment_type: "bridge".into(),
            description: None,
            fee: Some(1750.0),
            date: Some("2025-09-26".into()),
            notes: None,
        })
        .unwrap();
    assert_eq!(created.treatment_type, "Bridge");
    assert_eq!(created.fee, 1750.0);
    assert_eq!(core.daily_revenue("2025-09-26".into()).unwrap(), 1870.0);

    let missing_fee = core.create_treatment(FfiNewTreatment {
        patient_id: 2,
        treatment_type: "Crown".into(),
        description: None,
        fee: None,
        date: Some("2025-09-26".into()),
        notes: None,
    });
    assert!(matches!(missing_fee, Err(ClinicError::InvalidInput(_))));
    assert_eq!(core.filter_treatments(None, None).unwrap().len(), 5);

    let missing_date = core.create_treatment(FfiNewTreatment {
        patient_id: 2,
        treatment_type: "Filling".into(),
        description: None,
        fee: Some(180.0),
        date: None,
        notes: None,
    });
    assert!(matches!(missing_date, Err(ClinicError::InvalidInput(_))));

    let unknown_type = core.filter_treatments(Some("Veneer".into()), None);
    assert!(matches!(unknown_type, Err(ClinicError::InvalidInput(_))));

    assert!(matches!(core.delete_treatment(99), Err(ClinicError::NotFound(_))));
    assert!(matches!(core.month_revenue(2025, 13), Err(ClinicError::InvalidInput(_))));
}

#[test]
fn test_ffi_earnings_and_export() {
    let core = open_clinic_in_memory().unwrap();

    let weekly = core
        .earnings_report("weekly".into(), Some("2025-09-24".into()))
        .unwrap();
    assert_eq!(weekly.period_start, "2025-09-21");
    assert_eq!(weekly.period_label, "Week of Sep 21, 2025");
    assert_eq!(weekly.total_revenue, 1450.0);
    assert_eq!(weekly.by_type.len(), 4);

    let json = core
        .export_report_json("patients".into(), None, None)
        .unwrap();
    assert!(json.contains("Sarah Johnson"));

    let csv = core
        .export_report_csv(
            "treatments".into(),
            Some("2025-09-25".into()),
            Some("2025-09-26".into()),
        )
        .unwrap();
    assert_eq!(csv.lines().count(), 3);

    assert!(matches!(
        core.export_report_csv("invoices".into(), None, None),
        Err(ClinicError::InvalidInput(_))
    ));
}

#[test]
fn test_ffi_open_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db").to_string_lossy().into_owned();

    {
        let core = open_clinic(path.clone()).unwrap();
        core.delete_treatment(1).unwrap();
    }

    let core = open_clinic(path).unwrap();
    let remaining = core.filter_treatments(None, None).unwrap();
    assert_eq!(remaining.len(), 3);
    assert_eq!(core.revenue_series(None).unwrap().len(), 7);
}

#[test]
fn test_ffi_revenue_series_days() {
    let core = open_clinic_in_memory().unwrap();

    let series = core.revenue_series(Some(3)).unwrap();
    assert_eq!(series.len(), 3);
    assert!(series[0].date < series[2].date);
    assert_eq!(core.revenue_series(Some(30)).unwrap().len(), 30);
    assert!(matches!(core.revenue_series(Some(0)), Err(ClinicError::InvalidInput(_))));
}

#[test]
fn test_ffi_export_pages_use_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db").to_string_lossy().into_owned();
    let config = FfiClinicConfig {
        export_page_size: 3,
        ..FfiClinicConfig::default()
    };
    let core = open_clinic_with_config(path, config).unwrap();

    let pages = core.export_pages("treatments".into(), None, None).unwrap();
    assert_eq!(
        pages,
        vec![FfiPageRange { start: 0, end: 3 }, FfiPageRange { start: 3, end: 4 }]
    );

    let json = core.export_report_json("treatments".into(), None, None).unwrap();
    assert!(json.contains("\"pages\""));

    let invalid = FfiClinicConfig {
        export_page_size: 0,
        ..FfiClinicConfig::default()
    };
    let path = dir.path().join("other.db").to_string_lossy().into_owned();
    assert!(matches!(
        open_clinic_with_config(path, invalid),
        Err(ClinicError::InvalidInput(_))
    ));
}
