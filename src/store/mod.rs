// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminology store: load-once, read-many access to the reference dataset.
//!
//! Two load paths exist. The basic dataset only carries the English and
//! Ukrainian name tables, so a missing file degrades to the built-in table.
//! The extended dataset has no safe substitute and a missing file is an
//! error.

mod dataset;
mod defaults;

pub use dataset::Dataset;
pub use defaults::builtin_dataset;

use crate::config::TerminologyConfig;
use crate::error::{Result, TerminologyError};
use crate::i18n::Lang;
use crate::types::*;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Which load path produced a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Basic,
    Extended,
}

#[derive(Debug, Clone)]
pub struct TerminologyStore {
    dataset: Dataset,
    variant: Variant,
    /// `None` when the built-in table is in use.
    source: Option<PathBuf>,
}

impl TerminologyStore {
    /// Load the basic dataset, falling back to the built-in table when the
    /// file does not exist. Malformed files are still an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match read_source(path)? {
            Some(yaml) => {
                let dataset = Dataset::from_yaml_str(&yaml, path)?;
                log::debug!("loaded basic terminology from {}", path.display());
                Ok(Self {
                    dataset,
                    variant: Variant::Basic,
                    source: Some(path.to_path_buf()),
                })
            }
            None => {
                log::warn!(
                    "terminology file {} not found, using built-in translations",
                    path.display()
                );
                Ok(Self::builtin())
            }
        }
    }

    /// Load the extended dataset. A missing file is
    /// [`TerminologyError::DataNotFound`].
    pub fn load_extended<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = read_source(path)?.ok_or_else(|| TerminologyError::DataNotFound {
            path: path.to_path_buf(),
        })?;
        let dataset = Dataset::from_yaml_str(&yaml, path)?;
        log::debug!(
            "loaded extended terminology from {} ({} anatomic records)",
            path.display(),
            dataset.anatomic_official.len()
        );
        Ok(Self {
            dataset,
            variant: Variant::Extended,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn load_basic_from_config(config: &TerminologyConfig) -> Result<Self> {
        Self::load(&config.basic_path)
    }

    pub fn load_extended_from_config(config: &TerminologyConfig) -> Result<Self> {
        Self::load_extended(&config.extended_path)
    }

    /// Store backed by the built-in 19-site table.
    pub fn builtin() -> Self {
        Self {
            dataset: builtin_dataset(),
            variant: Variant::Basic,
            source: None,
        }
    }

    /// Wrap an already parsed dataset, re-running load-time validation.
    pub fn from_dataset(dataset: Dataset, variant: Variant) -> Result<Self> {
        let dataset = dataset.validated(Path::new("<memory>"))?;
        Ok(Self {
            dataset,
            variant,
            source: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    // ─── Name tables ────────────────────────────────────────────────

    /// Index of an organ name in the given locale. Case-insensitive, exact.
    pub fn lookup_index(&self, name: &str, lang: Lang) -> Option<AnatomicIndex> {
        self.dataset.name_map(lang).get(&name.to_lowercase()).copied()
    }

    /// Organ name for an index, by linear scan of the locale's table.
    pub fn lookup_name(&self, index: i64, lang: Lang) -> Option<&str> {
        self.dataset
            .name_map(lang)
            .iter()
            .find(|(_, idx)| i64::from(**idx) == index)
            .map(|(name, _)| name.as_str())
    }

    /// The locale's full name → index table.
    pub fn organs(&self, lang: Lang) -> &BTreeMap<String, AnatomicIndex> {
        self.dataset.name_map(lang)
    }

    /// Translate a `Medical_Terms_Mapping` term; unknown terms come back unchanged.
    pub fn lookup_term<'a>(&'a self, term: &'a str, target: Lang) -> &'a str {
        let terms = &self.dataset.medical_terms;
        match target {
            Lang::Uk => terms.get(term).map(String::as_str).unwrap_or(term),
            Lang::En => terms
                .iter()
                .find(|(_, uk)| uk.as_str() == term)
                .map(|(en, _)| en.as_str())
                .unwrap_or(term),
        }
    }

    // ─── Anatomic records ───────────────────────────────────────────

    /// Full record for an anatomic index.
    ///
    /// Indices outside `[0, 18]` are a caller bug and return
    /// [`TerminologyError::OutOfRange`]; an in-range index with no record
    /// returns `Ok(None)`.
    pub fn anatomic_detail(&self, index: i64, lang: Lang) -> Result<Option<AnatomicEntry>> {
        if !in_anatomic_range(index) {
            return Err(TerminologyError::OutOfRange { index });
        }
        Ok(self.entry(index as AnatomicIndex, lang))
    }

    /// Every available site in ascending index order; gaps are skipped.
    pub fn list_all(&self, lang: Lang) -> Vec<AnatomicEntry> {
        (0..=MAX_ANATOMIC_INDEX)
            .filter_map(|index| self.entry(index, lang))
            .collect()
    }

    /// Whether anatomic records come from the official section alone.
    fn official_records_only(&self) -> bool {
        self.variant == Variant::Extended || !self.dataset.anatomic_official.is_empty()
    }

    fn entry(&self, index: AnatomicIndex, lang: Lang) -> Option<AnatomicEntry> {
        let name_for = |lang: Lang| {
            self.lookup_name(i64::from(index), lang)
                .map(str::to_string)
                .unwrap_or_default()
        };

        if self.official_records_only() {
            let record = self.dataset.anatomic_official.get(&index)?;
            return Some(AnatomicEntry {
                index,
                name_en: record.english.clone().unwrap_or_else(|| name_for(Lang::En)),
                name_uk: record.official.clone(),
                latin: record.latin.clone(),
                synonyms: record.synonyms.clone(),
                icd11: record.icd11.clone(),
                topography: record.topography.clone(),
            });
        }

        // Basic tables: the site exists if the requested locale names it.
        self.lookup_name(i64::from(index), lang)?;
        Some(AnatomicEntry {
            index,
            name_en: name_for(Lang::En),
            name_uk: name_for(Lang::Uk),
            latin: String::new(),
            synonyms: Vec::new(),
            icd11: String::new(),
            topography: String::new(),
        })
    }

    // ─── Extended reference data ────────────────────────────────────

    /// ICD-11 code for an organ key of `Cancer_Types_ICD11` (e.g. `"lung"`).
    pub fn icd11_code(&self, organ: &str) -> Option<&str> {
        self.dataset
            .cancer_types
            .get(organ)
            .map(|cancer| cancer.code.as_str())
    }

    pub fn diagnosis_template(&self, category: &str) -> Option<&DiagnosisTemplate> {
        self.dataset.diagnosis_templates.get(category)
    }

    pub fn histological_type(&self, key: &str) -> Option<&HistologicalType> {
        self.dataset
            .histological_types
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, hist)| hist)
    }

    pub fn tumor_grade(&self, grade: &str) -> Option<&TumorGrade> {
        self.dataset.tumor_grades.get(grade)
    }

    pub fn tnm_component(&self, tag: &str) -> Option<&TnmComponent> {
        self.dataset.tnm_staging.get(tag)
    }

    /// Stage record (`stage_0` .. `stage_IV`), or an "undetermined" placeholder.
    pub fn cancer_stage(&self, stage: &str) -> CancerStage {
        self.dataset
            .cancer_stages
            .get(stage)
            .cloned()
            .unwrap_or_else(CancerStage::undetermined)
    }

    /// Expand an abbreviation within a category (`medical`, `technical`).
    /// Unknown abbreviations come back unchanged.
    pub fn abbreviation<'a>(&'a self, abbr: &'a str, category: &str) -> &'a str {
        self.dataset
            .abbreviations
            .get(category)
            .and_then(|table| table.get(abbr))
            .map(String::as_str)
            .unwrap_or(abbr)
    }

    pub fn certification(&self) -> Option<&Certification> {
        self.dataset.certification.as_ref()
    }

    pub fn metadata(&self) -> &serde_yaml::Mapping {
        &self.dataset.metadata
    }
}

/// `Ok(None)` when the file does not exist; other I/O failures are errors.
fn read_source(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(TerminologyError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
