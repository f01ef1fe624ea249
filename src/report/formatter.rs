// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic report rendering

use super::confidence::{check_confidence, format_percent, ConfidenceTier};
use crate::config::{TerminologyConfig, DEFAULT_DATE_FORMAT, DEFAULT_MODEL_VERSION};
use crate::error::{Result, TerminologyError};
use crate::i18n::{t, Lang};
use crate::store::TerminologyStore;
use crate::types::TnmStaging;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 80;

/// Inputs for [`ReportFormatter::format_full_report`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReportRequest {
    pub anatomic_index: i64,
    /// Key into `Diagnosis_Templates` (`malignant`, `benign`, ...).
    pub category: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tnm: Option<TnmStaging>,
}

impl FullReportRequest {
    pub fn new(anatomic_index: i64, category: impl Into<String>, confidence: f64) -> Self {
        Self {
            anatomic_index,
            category: category.into(),
            confidence,
            histology: None,
            grade: None,
            tnm: None,
        }
    }

    pub fn with_histology(mut self, histology: impl Into<String>) -> Self {
        self.histology = Some(histology.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_tnm(mut self, tnm: TnmStaging) -> Self {
        self.tnm = Some(tnm);
        self
    }
}

/// Explanation of a single TNM code such as `T2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TnmExplanation {
    pub component: String,
    pub name: String,
    pub value: String,
    pub description: String,
}

/// Short diagnosis block with a pathologist-confirmation warning.
///
/// Does not need a dataset: the organ and diagnosis are rendered as given.
pub fn format_simple_diagnosis(
    organ: &str,
    diagnosis: &str,
    confidence: f64,
    lang: Lang,
) -> Result<String> {
    let confidence = check_confidence(confidence)?;
    let tier = ConfidenceTier::from_confidence(confidence);

    let lines = [
        t(lang, "simple.title").to_string(),
        String::new(),
        format!("{}: {}", t(lang, "simple.location"), organ),
        format!("{}: {}", t(lang, "simple.conclusion"), diagnosis),
        format!(
            "{}: {} ({})",
            t(lang, "simple.confidence"),
            format_percent(confidence),
            tier.label(lang)
        ),
        String::new(),
        t(lang, "simple.warning").to_string(),
    ];
    Ok(lines.join("\n") + "\n")
}

pub struct ReportFormatter<'a> {
    store: &'a TerminologyStore,
    lang: Lang,
    model_version: String,
    date_format: String,
    report_date: Option<NaiveDate>,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(store: &'a TerminologyStore) -> Self {
        Self {
            store,
            lang: Lang::Uk,
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            report_date: None,
        }
    }

    pub fn from_config(store: &'a TerminologyStore, config: &TerminologyConfig) -> Self {
        Self {
            model_version: config.model_version.clone(),
            date_format: config.date_format.clone(),
            lang: config.lang,
            ..Self::new(store)
        }
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Pin the analysis date instead of using today's local date.
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    pub fn with_model_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = version.into();
        self
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn store(&self) -> &'a TerminologyStore {
        self.store
    }

    pub fn format_simple_diagnosis(
        &self,
        organ: &str,
        diagnosis: &str,
        confidence: f64,
    ) -> Result<String> {
        format_simple_diagnosis(organ, diagnosis, confidence, self.lang)
    }

    /// Structured report for one anatomic site.
    ///
    /// An absent anatomic record, unknown category, histology, grade or TNM
    /// value renders placeholder text. Out-of-range indices and confidences
    /// outside `[0, 1]` are errors.
    pub fn format_full_report(&self, request: &FullReportRequest) -> Result<String> {
        let lang = self.lang;
        let confidence = check_confidence(request.confidence)?;
        let tier = ConfidenceTier::from_confidence(confidence);
        let entry = self.store.anatomic_detail(request.anatomic_index, lang)?;

        let not_specified = t(lang, "placeholder.not_specified");
        let (organ_name, latin, topography, icd11) = match &entry {
            Some(entry) => (
                entry.name(lang).to_string(),
                entry.latin.clone(),
                non_empty_or(&entry.topography, not_specified),
                non_empty_or(&entry.icd11, not_specified),
            ),
            None => (
                t(lang, "placeholder.unknown_organ").to_string(),
                String::new(),
                not_specified.to_string(),
                not_specified.to_string(),
            ),
        };

        let template = self.store.diagnosis_template(&request.category);
        let diagnosis_text = template
            .map(|tpl| tpl.text(lang))
            .unwrap_or_else(|| t(lang, "placeholder.not_determined"));
        let qualifier = tier.qualifier(template, lang);

        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            t(lang, "full.title").to_string(),
            rule.clone(),
            String::new(),
            t(lang, "full.anatomy").to_string(),
            format!("  {}: {}", t(lang, "full.official_name"), organ_name),
            format!("  {}: {}", t(lang, "full.latin_name"), latin),
            format!("  {}: {}", t(lang, "full.topography"), topography),
            String::new(),
            t(lang, "full.result").to_string(),
            format!("  {} {}", diagnosis_text, qualifier),
            format!(
                "  {}: {} ({})",
                t(lang, "full.confidence"),
                format_percent(confidence),
                tier.label(lang)
            ),
        ];

        if let Some(histology) = &request.histology {
            lines.push(format!(
                "  {}: {}",
                t(lang, "full.histology"),
                self.histology_label(histology)
            ));
        }
        if let Some(grade) = &request.grade {
            lines.push(format!("  {}: {}", t(lang, "full.grade"), self.grade_text(grade)));
        }
        if let Some(tnm) = request.tnm.as_ref().and_then(|tnm| self.tnm_text(tnm)) {
            lines.push(format!("  {}: {}", t(lang, "full.tnm"), tnm));
        }

        lines.extend([
            String::new(),
            t(lang, "full.notes").to_string(),
            format!("  - {}: {}", t(lang, "full.icd11"), icd11),
            format!("  - {}: {}", t(lang, "full.date"), self.report_date_text()),
            format!("  - {}: {}", t(lang, "full.version"), self.model_version),
            String::new(),
            rule.clone(),
            t(lang, "full.disclaimer_title").to_string(),
            rule.clone(),
            String::new(),
            t(lang, "full.disclaimer").to_string(),
            String::new(),
            rule,
        ]);

        Ok(lines.join("\n") + "\n")
    }

    /// Split a code like `T2` into its component tag and value and describe both.
    pub fn explain_tnm(&self, code: &str) -> Result<TnmExplanation> {
        let component = code
            .chars()
            .next()
            .ok_or_else(|| TerminologyError::InvalidCode {
                code: code.to_string(),
            })?
            .to_string();

        let data = self.store.tnm_component(&component);
        let name = data.map(|c| c.name.clone()).unwrap_or_default();
        let description = data
            .and_then(|c| c.values.get(code))
            .cloned()
            .unwrap_or_else(|| t(self.lang, "placeholder.no_description").to_string());

        Ok(TnmExplanation {
            component,
            name,
            value: code.to_string(),
            description,
        })
    }

    fn histology_label(&self, key: &str) -> String {
        self.store
            .histological_type(key)
            .map(|hist| hist.label(self.lang).to_string())
            .unwrap_or_else(|| key.to_string())
    }

    fn grade_text(&self, grade: &str) -> String {
        match self.store.tumor_grade(grade) {
            Some(data) if !data.description.is_empty() => {
                format!("{} - {} ({})", grade, data.label(self.lang), data.description)
            }
            Some(data) => format!("{} - {}", grade, data.label(self.lang)),
            None => format!("{} - {}", grade, grade),
        }
    }

    /// `None` when no component is present, so no TNM line is emitted.
    fn tnm_text(&self, tnm: &TnmStaging) -> Option<String> {
        let parts: Vec<String> = tnm
            .components()
            .map(|(tag, value)| {
                let description = self
                    .store
                    .tnm_component(tag)
                    .and_then(|c| c.values.get(value))
                    .map(String::as_str)
                    .unwrap_or(value);
                format!("{}: {} ({})", tag, value, description)
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    fn report_date_text(&self) -> String {
        let date = self
            .report_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let mut text = String::new();
        if write!(text, "{}", date.format(&self.date_format)).is_err() {
            log::warn!(
                "invalid report date format {:?}, using {}",
                self.date_format,
                DEFAULT_DATE_FORMAT
            );
            text = date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        text
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
