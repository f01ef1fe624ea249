// SPDX-License-Identifier: PMPL-1.0-or-later

//! Certification readiness of a loaded dataset

use crate::store::TerminologyStore;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_REGULATORY_BODY: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationChecks {
    pub has_moh_standards: bool,
    pub has_quality_standards: bool,
    pub has_intended_use: bool,
    pub has_icd11_codes: bool,
    pub has_tnm_staging: bool,
}

impl CertificationChecks {
    pub fn as_pairs(&self) -> [(&'static str, bool); 5] {
        [
            ("has_moh_standards", self.has_moh_standards),
            ("has_quality_standards", self.has_quality_standards),
            ("has_intended_use", self.has_intended_use),
            ("has_icd11_codes", self.has_icd11_codes),
            ("has_tnm_staging", self.has_tnm_staging),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.as_pairs().iter().all(|(_, passed)| *passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationReport {
    pub compliant: bool,
    pub checks: CertificationChecks,
    pub regulatory_body: String,
}

pub fn validate_certification(store: &TerminologyStore) -> CertificationReport {
    let certification = store.certification();
    let dataset = store.dataset();

    let checks = CertificationChecks {
        has_moh_standards: certification.is_some_and(|c| c.regulatory.is_some()),
        has_quality_standards: certification.is_some_and(|c| c.quality_standards.is_some()),
        has_intended_use: certification.is_some_and(|c| c.intended_use.is_some()),
        has_icd11_codes: !dataset.cancer_types.is_empty(),
        has_tnm_staging: !dataset.tnm_staging.is_empty(),
    };

    let regulatory_body = certification
        .and_then(|c| c.regulatory.as_ref())
        .and_then(|r| r.ukraine.as_ref())
        .and_then(|authority| authority.body.clone())
        .unwrap_or_else(|| UNKNOWN_REGULATORY_BODY.to_string());

    if !checks.all_passed() {
        let failed: Vec<&str> = checks
            .as_pairs()
            .iter()
            .filter(|(_, passed)| !passed)
            .map(|(name, _)| *name)
            .collect();
        log::debug!("certification checks failed: {}", failed.join(", "));
    }

    CertificationReport {
        compliant: checks.all_passed(),
        checks,
        regulatory_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{builtin_dataset, Dataset, Variant};
    use crate::types::*;
    use std::collections::BTreeMap;

    fn complete_dataset() -> Dataset {
        let mut dataset = builtin_dataset();
        dataset.certification = Some(Certification {
            regulatory: Some(Regulatory {
                ukraine: Some(RegulatoryAuthority {
                    body: Some("МОЗ України".to_string()),
                    registration: None,
                }),
            }),
            quality_standards: Some(serde_yaml::Value::String("ISO 15189".to_string())),
            intended_use: Some(serde_yaml::Value::String("допоміжна діагностика".to_string())),
        });
        dataset.cancer_types.insert(
            "lung".to_string(),
            CancerType {
                code: "2C25".to_string(),
                uk: None,
                en: None,
            },
        );
        dataset.tnm_staging.insert(
            "T".to_string(),
            TnmComponent {
                name: "Первинна пухлина".to_string(),
                values: BTreeMap::new(),
            },
        );
        dataset
    }

    fn validate(dataset: Dataset) -> CertificationReport {
        let store = TerminologyStore::from_dataset(dataset, Variant::Extended).unwrap();
        validate_certification(&store)
    }

    #[test]
    fn all_sections_present_is_compliant() {
        let report = validate(complete_dataset());
        assert!(report.compliant);
        assert_eq!(report.regulatory_body, "МОЗ України");
    }

    #[test]
    fn missing_regulatory_fails() {
        let mut dataset = complete_dataset();
        dataset.certification.as_mut().unwrap().regulatory = None;
        let report = validate(dataset);
        assert!(!report.compliant);
        assert!(!report.checks.has_moh_standards);
        assert_eq!(report.regulatory_body, UNKNOWN_REGULATORY_BODY);
    }

    #[test]
    fn missing_quality_standards_fails() {
        let mut dataset = complete_dataset();
        dataset.certification.as_mut().unwrap().quality_standards = None;
        let report = validate(dataset);
        assert!(!report.compliant);
        assert!(!report.checks.has_quality_standards);
    }

    #[test]
    fn missing_intended_use_fails() {
        let mut dataset = complete_dataset();
        dataset.certification.as_mut().unwrap().intended_use = None;
        let report = validate(dataset);
        assert!(!report.compliant);
        assert!(!report.checks.has_intended_use);
    }

    #[test]
    fn missing_icd11_codes_fails() {
        let mut dataset = complete_dataset();
        dataset.cancer_types.clear();
        let report = validate(dataset);
        assert!(!report.compliant);
        assert!(!report.checks.has_icd11_codes);
    }

    #[test]
    fn missing_tnm_staging_fails() {
        let mut dataset = complete_dataset();
        dataset.tnm_staging.clear();
        let report = validate(dataset);
        assert!(!report.compliant);
        assert!(!report.checks.has_tnm_staging);
    }

    #[test]
    fn null_regulatory_key_still_counts() {
        let mut dataset = complete_dataset();
        let yaml = "Certification:\n  regulatory:\n  quality_standards: ~\n  intended_use: допоміжна діагностика\n";
        dataset.certification = Dataset::from_yaml_str(yaml, std::path::Path::new("inline.yaml"))
            .unwrap()
            .certification;
        let report = validate(dataset);
        assert!(report.checks.has_moh_standards);
        assert!(report.checks.has_quality_standards);
        assert!(report.compliant);
        assert_eq!(report.regulatory_body, UNKNOWN_REGULATORY_BODY);
    }

    #[test]
    fn basic_dataset_is_not_compliant() {
        let report = validate_certification(&TerminologyStore::builtin());
        assert!(!report.compliant);
        assert!(report.checks.as_pairs().iter().all(|(_, passed)| !passed));
        assert_eq!(report.regulatory_body, "N/A");
    }
}
