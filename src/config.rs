// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration: dataset locations and report stamping.

use crate::i18n::Lang;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BASIC_PATH: &str = "./configs/anatomic_mapping_uk.yaml";
pub const DEFAULT_EXTENDED_PATH: &str = "./configs/anatomic_mapping_uk_extended.yaml";
pub const DEFAULT_MODEL_VERSION: &str = "CHIEF Ukraine v2.0";
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

const BASIC_PATH_ENV: &str = "CHIEF_TERMINOLOGY_PATH";
const EXTENDED_PATH_ENV: &str = "CHIEF_TERMINOLOGY_EXTENDED_PATH";
const MODEL_VERSION_ENV: &str = "CHIEF_REPORT_VERSION";
const REPORT_LANG_ENV: &str = "CHIEF_REPORT_LANG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyConfig {
    /// Basic name tables; a missing file falls back to the built-in table.
    pub basic_path: PathBuf,
    /// Extended terminology; a missing file is a hard error.
    pub extended_path: PathBuf,
    /// Version tag printed in the notes section of full reports.
    pub model_version: String,
    /// `chrono` format string for the analysis date.
    pub date_format: String,
    /// Locale of rendered reports.
    pub lang: Lang,
}

impl TerminologyConfig {
    /// Defaults overridden by `CHIEF_TERMINOLOGY_PATH`,
    /// `CHIEF_TERMINOLOGY_EXTENDED_PATH`, `CHIEF_REPORT_VERSION` and
    /// `CHIEF_REPORT_LANG` (an ISO 639-1 code).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = non_empty_var(BASIC_PATH_ENV) {
            config.basic_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty_var(EXTENDED_PATH_ENV) {
            config.extended_path = PathBuf::from(path);
        }
        if let Some(version) = non_empty_var(MODEL_VERSION_ENV) {
            config.model_version = version;
        }
        if let Some(code) = non_empty_var(REPORT_LANG_ENV) {
            match parse_lang(&code) {
                Some(lang) => config.lang = lang,
                None => log::warn!(
                    "{}={:?} is not a supported locale; using {}",
                    REPORT_LANG_ENV,
                    code,
                    config.lang
                ),
            }
        }
        config
    }

    pub fn with_basic_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.basic_path = path.into();
        self
    }

    pub fn with_extended_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.extended_path = path.into();
        self
    }

    pub fn with_model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = version.into();
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        Self {
            basic_path: PathBuf::from(DEFAULT_BASIC_PATH),
            extended_path: PathBuf::from(DEFAULT_EXTENDED_PATH),
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            lang: Lang::default(),
        }
    }
}

fn parse_lang(code: &str) -> Option<Lang> {
    Lang::from_code(code.trim())
}

fn non_empty_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
