// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the terminology dataset.
//!
//! Every record here is read-only reference data: it is deserialized once
//! from the YAML dataset (or built from the fallback table) and never
//! mutated afterwards.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anatomical site index as used by the classifier head.
pub type AnatomicIndex = u8;

/// Highest anatomical index the classifier knows about.
pub const MAX_ANATOMIC_INDEX: AnatomicIndex = 18;

/// Number of anatomical sites (`0..=MAX_ANATOMIC_INDEX`).
pub const ANATOMIC_SITE_COUNT: usize = MAX_ANATOMIC_INDEX as usize + 1;

/// Whether `index` falls inside the declared `[0, 18]` range.
pub fn in_anatomic_range(index: i64) -> bool {
    (0..=i64::from(MAX_ANATOMIC_INDEX)).contains(&index)
}

/// Fully resolved anatomical site.
///
/// The basic dataset only fills `index`, `name_en` and `name_uk`; the
/// remaining fields stay empty unless the extended dataset is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnatomicEntry {
    pub index: AnatomicIndex,
    pub name_en: String,
    pub name_uk: String,
    #[serde(default)]
    pub latin: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub icd11: String,
    #[serde(default)]
    pub topography: String,
}

impl AnatomicEntry {
    /// Locale label, falling back to the other locale when this one is empty.
    pub fn name(&self, lang: Lang) -> &str {
        let (primary, secondary) = match lang {
            Lang::Uk => (&self.name_uk, &self.name_en),
            Lang::En => (&self.name_en, &self.name_uk),
        };
        if primary.is_empty() {
            secondary
        } else {
            primary
        }
    }
}

/// One record of the `Anatomic_Ukrainian_Official` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialAnatomicRecord {
    /// Official Ukrainian name (МОЗ України).
    pub official: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    pub latin: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub icd11: String,
    pub topography: String,
}

/// `Cancer_Types_ICD11` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerType {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// `Diagnosis_Templates` record, keyed by diagnosis category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisTemplate {
    pub uk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_high: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_moderate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_low: Option<String>,
}

impl DiagnosisTemplate {
    pub fn text(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.uk,
            Lang::En => self.en.as_deref().unwrap_or(&self.uk),
        }
    }
}

/// Diagnosis categories the classifier emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisCategory {
    Malignant,
    Benign,
    Suspicious,
    Normal,
}

impl DiagnosisCategory {
    /// Key used in the `Diagnosis_Templates` section.
    pub fn key(&self) -> &'static str {
        match self {
            DiagnosisCategory::Malignant => "malignant",
            DiagnosisCategory::Benign => "benign",
            DiagnosisCategory::Suspicious => "suspicious",
            DiagnosisCategory::Normal => "normal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "malignant" => Some(DiagnosisCategory::Malignant),
            "benign" => Some(DiagnosisCategory::Benign),
            "suspicious" => Some(DiagnosisCategory::Suspicious),
            "normal" => Some(DiagnosisCategory::Normal),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiagnosisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl From<DiagnosisCategory> for String {
    fn from(category: DiagnosisCategory) -> Self {
        category.key().to_string()
    }
}

/// `Histological_Types` record (WHO classification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistologicalType {
    pub uk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    pub lat: String,
    pub snomed: String,
}

impl HistologicalType {
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.uk,
            Lang::En => self.en.as_deref().unwrap_or(&self.uk),
        }
    }
}

/// `Tumor_Grade` record, keyed by grade code (`G1`, `G2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TumorGrade {
    pub uk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl TumorGrade {
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::Uk => &self.uk,
            Lang::En => self.en.as_deref().unwrap_or(&self.uk),
        }
    }
}

/// One `TNM_Staging` component (`T`, `N` or `M`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TnmComponent {
    pub name: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

/// `Cancer_Stages` record, keyed by `stage_0` .. `stage_IV`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancerStage {
    pub uk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prognosis: String,
}

impl CancerStage {
    /// Placeholder returned for stage keys missing from the dataset.
    pub fn undetermined() -> Self {
        Self {
            uk: "Не визначено".to_string(),
            en: Some("Not determined".to_string()),
            description: String::new(),
            prognosis: String::new(),
        }
    }
}

/// `Certification` section.
///
/// Each field is `Some` whenever its key is present, even with a null value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(
        default,
        deserialize_with = "key_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub regulatory: Option<Regulatory>,
    #[serde(
        default,
        deserialize_with = "key_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub quality_standards: Option<serde_yaml::Value>,
    #[serde(
        default,
        deserialize_with = "key_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub intended_use: Option<serde_yaml::Value>,
}

/// Maps a present-but-null key to `Some(T::default())`.
fn key_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|value| Some(value.unwrap_or_default()))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Regulatory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ukraine: Option<RegulatoryAuthority>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryAuthority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
}

/// Caller-supplied TNM staging for a full report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TnmStaging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<String>,
}

impl TnmStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_t(mut self, value: impl Into<String>) -> Self {
        self.t = Some(value.into());
        self
    }

    pub fn with_n(mut self, value: impl Into<String>) -> Self {
        self.n = Some(value.into());
        self
    }

    pub fn with_m(mut self, value: impl Into<String>) -> Self {
        self.m = Some(value.into());
        self
    }

    /// Present components in `T`, `N`, `M` order.
    pub fn components(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [("T", &self.t), ("N", &self.n), ("M", &self.m)]
            .into_iter()
            .filter_map(|(tag, value)| value.as_deref().map(|v| (tag, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }
}
