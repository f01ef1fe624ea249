// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed schema of the terminology YAML document.
//!
//! Section names are part of the external contract and stay exactly as the
//! dataset authors wrote them (`Anatomic_Ukrainian_Official`, `TNM_Staging`,
//! ...). Every section is optional at the document level; records inside a
//! section are checked field by field by serde.

use crate::error::{Result, TerminologyError};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Free-form metadata, kept in document order.
    #[serde(rename = "Metadata", default, skip_serializing_if = "serde_yaml::Mapping::is_empty")]
    pub metadata: serde_yaml::Mapping,

    #[serde(rename = "Anatomic", default)]
    pub anatomic: BTreeMap<String, AnatomicIndex>,

    #[serde(rename = "Anatomic_Ukrainian", default)]
    pub anatomic_ukrainian: BTreeMap<String, AnatomicIndex>,

    #[serde(rename = "Medical_Terms_Mapping", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub medical_terms: BTreeMap<String, String>,

    #[serde(rename = "Anatomic_Ukrainian_Official", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub anatomic_official: BTreeMap<AnatomicIndex, OfficialAnatomicRecord>,

    #[serde(rename = "Cancer_Types_ICD11", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cancer_types: BTreeMap<String, CancerType>,

    #[serde(rename = "Diagnosis_Templates", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub diagnosis_templates: BTreeMap<String, DiagnosisTemplate>,

    /// Histological types in document order.
    #[serde(
        rename = "Histological_Types",
        default,
        with = "document_order",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub histological_types: Vec<(String, HistologicalType)>,

    #[serde(rename = "Tumor_Grade", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tumor_grades: BTreeMap<String, TumorGrade>,

    #[serde(rename = "TNM_Staging", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tnm_staging: BTreeMap<String, TnmComponent>,

    #[serde(rename = "Cancer_Stages", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cancer_stages: BTreeMap<String, CancerStage>,

    /// Category (`medical`, `technical`) → abbreviation → expansion.
    #[serde(rename = "Abbreviations", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub abbreviations: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(rename = "Certification", default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<Certification>,
}

impl Dataset {
    /// Parse and validate a YAML document. `origin` only feeds error messages.
    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self> {
        let dataset: Dataset =
            serde_yaml::from_str(yaml).map_err(|err| TerminologyError::InvalidData {
                path: origin.to_path_buf(),
                message: err.to_string(),
            })?;
        dataset.validated(origin)
    }

    /// Case-fold the name maps and reject indices outside `[0, 18]`.
    pub fn validated(mut self, origin: &Path) -> Result<Self> {
        self.anatomic = fold_names(self.anatomic, "Anatomic", origin)?;
        self.anatomic_ukrainian =
            fold_names(self.anatomic_ukrainian, "Anatomic_Ukrainian", origin)?;

        if let Some(index) = self
            .anatomic_official
            .keys()
            .find(|index| **index > MAX_ANATOMIC_INDEX)
        {
            return Err(TerminologyError::InvalidData {
                path: origin.to_path_buf(),
                message: format!(
                    "Anatomic_Ukrainian_Official: index {} outside 0..={}",
                    index, MAX_ANATOMIC_INDEX
                ),
            });
        }

        Ok(self)
    }

    pub fn name_map(&self, lang: crate::i18n::Lang) -> &BTreeMap<String, AnatomicIndex> {
        match lang {
            crate::i18n::Lang::En => &self.anatomic,
            crate::i18n::Lang::Uk => &self.anatomic_ukrainian,
        }
    }
}

/// A YAML mapping as a key-ordered list of pairs.
mod document_order {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: DeserializeOwned,
    {
        let mapping = Option::<serde_yaml::Mapping>::deserialize(deserializer)?.unwrap_or_default();
        mapping
            .into_iter()
            .map(|(key, value)| {
                let key: String = serde_yaml::from_value(key).map_err(D::Error::custom)?;
                let value = serde_yaml::from_value(value).map_err(D::Error::custom)?;
                Ok((key, value))
            })
            .collect()
    }
}

fn fold_names(
    names: BTreeMap<String, AnatomicIndex>,
    section: &str,
    origin: &Path,
) -> Result<BTreeMap<String, AnatomicIndex>> {
    let mut folded = BTreeMap::new();
    for (name, index) in names {
        if index > MAX_ANATOMIC_INDEX {
            return Err(TerminologyError::InvalidData {
                path: origin.to_path_buf(),
                message: format!(
                    "{}: '{}' maps to index {}, expected 0..={}",
                    section, name, index, MAX_ANATOMIC_INDEX
                ),
            });
        }
        // Later spellings of the same folded key win.
        folded.insert(name.to_lowercase(), index);
    }
    Ok(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("inline.yaml")
    }

    #[test]
    fn parses_basic_sections_and_folds_case() {
        let yaml = "Anatomic:\n  Colon: 13\nAnatomic_Ukrainian:\n  Товста Кишка: 13\n";
        let dataset = Dataset::from_yaml_str(yaml, origin()).unwrap();
        assert_eq!(dataset.anatomic.get("colon"), Some(&13));
        assert_eq!(dataset.anatomic_ukrainian.get("товста кишка"), Some(&13));
        assert!(dataset.anatomic_official.is_empty());
    }

    #[test]
    fn rejects_index_above_range() {
        let yaml = "Anatomic:\n  colon: 25\n";
        let err = Dataset::from_yaml_str(yaml, origin()).unwrap_err();
        assert!(matches!(err, TerminologyError::InvalidData { .. }));
        assert!(err.to_string().contains("25"));
    }

    #[test]
    fn rejects_negative_index() {
        let yaml = "Anatomic:\n  colon: -1\n";
        assert!(matches!(
            Dataset::from_yaml_str(yaml, origin()),
            Err(TerminologyError::InvalidData { .. })
        ));
    }

    #[test]
    fn rejects_official_record_missing_required_field() {
        let yaml = "Anatomic_Ukrainian_Official:\n  6:\n    official: легеня\n    latin: pulmo\n";
        let err = Dataset::from_yaml_str(yaml, origin()).unwrap_err();
        assert!(matches!(err, TerminologyError::InvalidData { .. }));
    }

    #[test]
    fn rejects_official_index_above_range() {
        let yaml = "Anatomic_Ukrainian_Official:\n  19:\n    official: x\n    latin: x\n    icd11: x\n    topography: x\n";
        assert!(matches!(
            Dataset::from_yaml_str(yaml, origin()),
            Err(TerminologyError::InvalidData { .. })
        ));
    }

    #[test]
    fn duplicate_folded_names_keep_last() {
        let yaml = "Anatomic:\n  COLON: 12\n  colon: 13\n";
        let dataset = Dataset::from_yaml_str(yaml, origin()).unwrap();
        assert_eq!(dataset.anatomic.len(), 1);
        assert_eq!(dataset.anatomic.get("colon"), Some(&13));
    }
}
