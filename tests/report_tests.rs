// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end report rendering against the bundled datasets

use chief_terminology::report::{
    export_summary, format_simple_diagnosis, validate_certification, FullReportRequest,
    ReportFormatter, SummaryExporter, SummaryFormat,
};
use chief_terminology::store::TerminologyStore;
use chief_terminology::types::{DiagnosisCategory, TnmStaging};
use chief_terminology::{Lang, TerminologyError};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

fn extended_store() -> TerminologyStore {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/anatomic_mapping_uk_extended.yaml");
    TerminologyStore::load_extended(path).expect("bundled extended dataset should load")
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

#[test]
fn test_simple_diagnosis_with_builtin_defaults() {
    let store = TerminologyStore::builtin();
    assert_eq!(store.lookup_index("товста кишка", Lang::Uk), Some(13));
    let organ = store.lookup_name(13, Lang::Uk).expect("colon present");
    assert_eq!(organ, "товста кишка");

    let text = format_simple_diagnosis(organ, "Виявлено ознаки злоякісної пухлини", 0.87, Lang::Uk)
        .expect("valid confidence");
    assert!(text.contains("87.0%"));
    assert!(text.contains("висока"));
    assert!(text.contains("Виявлено ознаки злоякісної пухлини"));
}

#[test]
fn test_full_lung_report() {
    let store = extended_store();
    let request = FullReportRequest::new(6, "malignant", 0.87)
        .with_histology("adenocarcinoma")
        .with_grade("G2")
        .with_tnm(TnmStaging::new().with_t("T2").with_n("N1").with_m("M0"));
    let report = ReportFormatter::new(&store)
        .with_report_date(report_date())
        .format_full_report(&request)
        .expect("report renders");

    assert!(report.contains("Українська назва: легеня"));
    assert!(report.contains("Гістологічний тип: аденокарцинома"));
    assert!(report.contains("G2 - помірно диференційована (проміжний ступінь злоякісності)"));
    assert!(report.contains("T: T2 (пухлина більшого розміру, але в межах органу)"));
    assert!(report.contains("N: N1 (метастази в 1-3 регіонарних лімфовузлах)"));
    assert!(report.contains("M: M0 (віддалені метастази відсутні)"));
    assert!(report.contains("Дата аналізу: 16.10.2026"));
    assert!(report.contains("Код МКХ-11: XA8NQ8"));
}

#[test]
fn test_full_report_without_optional_sections() {
    let store = extended_store();
    let report = ReportFormatter::new(&store)
        .format_full_report(&FullReportRequest::new(13, DiagnosisCategory::Benign, 0.55))
        .expect("report renders");

    assert!(!report.contains("Гістологічний тип"));
    assert!(!report.contains("Ступінь диференціювання"));
    assert!(!report.contains("TNM"));
    assert!(report.contains("Виявлено ознаки доброякісного новоутворення з помірною ймовірністю"));
}

#[test]
fn test_full_report_rejects_bad_inputs() {
    let store = extended_store();
    let formatter = ReportFormatter::new(&store);
    assert!(matches!(
        formatter.format_full_report(&FullReportRequest::new(-1, "malignant", 0.9)),
        Err(TerminologyError::OutOfRange { .. })
    ));
    assert!(matches!(
        formatter.format_full_report(&FullReportRequest::new(6, "malignant", -0.2)),
        Err(TerminologyError::InvalidConfidence { .. })
    ));
}

#[test]
fn test_explain_tnm_against_dataset() {
    let store = extended_store();
    let formatter = ReportFormatter::new(&store);

    let t2 = formatter.explain_tnm("T2").expect("non-empty code");
    assert_eq!(t2.component, "T");
    assert_eq!(t2.name, "Первинна пухлина");
    assert!(!t2.description.is_empty());

    assert!(matches!(
        formatter.explain_tnm(""),
        Err(TerminologyError::InvalidCode { .. })
    ));
}

#[test]
fn test_bundled_dataset_is_certification_ready() {
    let report = validate_certification(&extended_store());
    assert!(report.compliant, "checks: {:?}", report.checks);
    assert_eq!(report.regulatory_body, "Міністерство охорони здоров'я України");
}

#[test]
fn test_export_text_summary() {
    let store = extended_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("terminology_summary.txt");
    export_summary(&store, &path).expect("export succeeds");

    let text = fs::read_to_string(&path).expect("summary is UTF-8");
    assert!(text.starts_with(&"=".repeat(80)));
    assert!(text.contains("ЗВЕДЕННЯ УКРАЇНСЬКОЇ МЕДИЧНОЇ ТЕРМІНОЛОГІЇ CHIEF"));
    assert!(text.contains("  version: 2.0"));
    assert!(text.contains("6. ЛЕГЕНЯ"));
    assert!(text.contains("   Латинська: pulmo"));
    assert!(text.contains("  аденокарцинома (adenocarcinoma) - SNOMED: 35917007"));
    assert!(text.contains("T - Первинна пухлина:"));
    assert!(text.contains("  T2: пухлина більшого розміру, але в межах органу"));
}

#[test]
fn test_export_yaml_summary() {
    let store = extended_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("summary.{}", SummaryFormat::Yaml.extension()));
    SummaryExporter::new(&store)
        .with_lang(Lang::En)
        .export_as(&path, SummaryFormat::Yaml)
        .expect("export succeeds");

    let value: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&path).expect("readable")).expect("valid yaml");
    assert_eq!(value["anatomic"][6]["name_en"].as_str(), Some("lung"));
    assert!(value["histological_types"]["adenocarcinoma"].is_mapping());
}

#[test]
fn test_export_to_missing_directory_fails() {
    let store = extended_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no_such_dir").join("summary.txt");
    assert!(export_summary(&store, &path).is_err());
}
