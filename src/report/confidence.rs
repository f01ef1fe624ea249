// SPDX-License-Identifier: PMPL-1.0-or-later

//! Confidence tiers shared by the simple and the full report.

use crate::error::{Result, TerminologyError};
use crate::i18n::{t, Lang};
use crate::types::DiagnosisTemplate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    VeryHigh,
    High,
    Moderate,
    Low,
}

/// Lower bounds, inclusive, checked top-down. Anything below the last
/// bound is [`ConfidenceTier::Low`].
const TIER_THRESHOLDS: [(f64, ConfidenceTier); 3] = [
    (0.90, ConfidenceTier::VeryHigh),
    (0.70, ConfidenceTier::High),
    (0.50, ConfidenceTier::Moderate),
];

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(bound, _)| confidence >= *bound)
            .map(|(_, tier)| *tier)
            .unwrap_or(ConfidenceTier::Low)
    }

    /// Qualitative descriptor, e.g. "висока" / "high".
    pub fn label(&self, lang: Lang) -> &'static str {
        let key = match self {
            ConfidenceTier::VeryHigh => "confidence.very_high",
            ConfidenceTier::High => "confidence.high",
            ConfidenceTier::Moderate => "confidence.moderate",
            ConfidenceTier::Low => "confidence.low",
        };
        t(lang, key)
    }

    /// Probability phrase appended to a diagnosis template.
    ///
    /// Templates carry three qualifiers; `VeryHigh` and `High` both use
    /// `confidence_high`. Template qualifiers are Ukrainian text, so English
    /// reports always use the catalog phrase.
    pub fn qualifier<'a>(&self, template: Option<&'a DiagnosisTemplate>, lang: Lang) -> &'a str {
        let (from_template, fallback_key) = match self {
            ConfidenceTier::VeryHigh | ConfidenceTier::High => (
                template.and_then(|tpl| tpl.confidence_high.as_deref()),
                "qualifier.high",
            ),
            ConfidenceTier::Moderate => (
                template.and_then(|tpl| tpl.confidence_moderate.as_deref()),
                "qualifier.moderate",
            ),
            ConfidenceTier::Low => (
                template.and_then(|tpl| tpl.confidence_low.as_deref()),
                "qualifier.low",
            ),
        };
        match (lang, from_template) {
            (Lang::Uk, Some(text)) => text,
            _ => t(lang, fallback_key),
        }
    }
}

/// Reject confidences outside `[0, 1]`, NaN included.
pub fn check_confidence(confidence: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(TerminologyError::InvalidConfidence { value: confidence })
    }
}

/// Percentage with one decimal: `0.87` → `"87.0%"`.
pub fn format_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
