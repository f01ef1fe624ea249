// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for report labels, headings and disclaimers.
//!
//! Every fixed string that ends up in a rendered report lives here as a
//! compile-time static table, one per locale. Dataset-driven text (organ
//! names, diagnosis templates, TNM descriptions) comes from the loaded
//! [`TerminologyStore`](crate::store::TerminologyStore) instead.
//!
//! Lookup is O(n) on the key list, which is fine for the ~60 keys we have;
//! it runs a handful of times per rendered report.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Ukrainian entry to `UK` (missing keys fall back to English)

use serde::{Deserialize, Serialize};

/// Output locale for lookups and rendered reports.
///
/// Each variant maps to an ISO 639-1 two-letter code. Ukrainian is the
/// default because the reports are written for Ukrainian pathology labs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    #[default]
    Uk,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Uk => "uk",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "uk" => Some(Lang::Uk),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Uk, Lang::En]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a message key in the specified language.
///
/// Falls back to English if the key is not found in the requested language.
/// If the key is missing in English too, returns `""`.
///
/// # Examples
///
/// ```
/// use chief_terminology::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "simple.conclusion"), "Conclusion");
/// assert_eq!(t(Lang::Uk, "simple.conclusion"), "Висновок");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Uk => UK,
    }
}

// ─── English (all keys defined here) ────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Simple diagnosis block
    ("simple.title", "AUTOMATED ANALYSIS RESULTS"),
    ("simple.location", "Anatomical Location"),
    ("simple.conclusion", "Conclusion"),
    ("simple.confidence", "Model Confidence"),
    (
        "simple.warning",
        "WARNING: This is a preliminary conclusion from an automated system.\n\
         Final diagnosis must be established by a qualified pathologist.",
    ),
    // Confidence tiers
    ("confidence.very_high", "very high"),
    ("confidence.high", "high"),
    ("confidence.moderate", "moderate"),
    ("confidence.low", "low"),
    // Template qualifier fallbacks
    ("qualifier.high", "with high probability"),
    ("qualifier.moderate", "with moderate probability"),
    ("qualifier.low", "with low probability"),
    // Full report
    ("full.title", "AUTOMATED HISTOPATHOLOGY SPECIMEN ANALYSIS"),
    ("full.anatomy", "ANATOMICAL LOCATION:"),
    ("full.official_name", "Official name"),
    ("full.latin_name", "Latin name"),
    ("full.topography", "Topography"),
    ("full.result", "ANALYSIS RESULT:"),
    ("full.confidence", "Model confidence"),
    ("full.histology", "Histological type"),
    ("full.grade", "Differentiation grade"),
    ("full.tnm", "TNM"),
    ("full.notes", "NOTES:"),
    ("full.icd11", "ICD-11 code"),
    ("full.date", "Analysis date"),
    ("full.version", "Model version"),
    ("full.disclaimer_title", "IMPORTANT DISCLAIMER"),
    (
        "full.disclaimer",
        "This conclusion was produced by the CHIEF automated histopathology image\n\
         analysis system (Clinical Histopathology Imaging Evaluation Foundation) and\n\
         is ONLY AN AUXILIARY TOOL for clinical decision making.\n\
         \n\
         The FINAL DIAGNOSIS must be established by a qualified pathologist\n\
         based on:\n\
         \x20 - Comprehensive analysis of all clinical data\n\
         \x20 - Personal microscopic examination of the specimen\n\
         \x20 - Additional studies (when necessary)\n\
         \x20 - Clinical and anamnestic data\n\
         \n\
         The system complies with the requirements of the Ministry of Health of\n\
         Ukraine and does not replace professional medical judgement.",
    ),
    // Placeholders
    ("placeholder.unknown_organ", "unknown organ"),
    ("placeholder.not_specified", "not specified"),
    ("placeholder.not_determined", "Not determined"),
    ("placeholder.no_description", "Description not found"),
    // Terminology summary export
    ("summary.title", "CHIEF UKRAINIAN MEDICAL TERMINOLOGY SUMMARY"),
    ("summary.metadata", "METADATA:"),
    ("summary.anatomy", "ANATOMICAL LOCATIONS:"),
    ("summary.latin", "Latin"),
    ("summary.topography", "Topography"),
    ("summary.icd11", "ICD-11"),
    ("summary.histology", "HISTOLOGICAL TYPES:"),
    ("summary.tnm", "TNM CLASSIFICATION:"),
    // Reference tables
    ("table.title", "ANATOMICAL LOCATION REFERENCE TABLE"),
    ("table.index", "#"),
    ("table.name", "Official name"),
    ("table.latin", "Latin name"),
    ("table.icd11", "ICD-11"),
    ("organs.title", "=== AVAILABLE ANATOMICAL LOCATIONS ==="),
];

// ─── Ukrainian ──────────────────────────────────────────────────────

const UK: &[(&str, &str)] = &[
    // Simple diagnosis block
    ("simple.title", "РЕЗУЛЬТАТИ АВТОМАТИЗОВАНОГО АНАЛІЗУ"),
    ("simple.location", "Анатомічна локалізація"),
    ("simple.conclusion", "Висновок"),
    ("simple.confidence", "Впевненість моделі"),
    (
        "simple.warning",
        "УВАГА: Це попередній висновок автоматизованої системи.\n\
         Остаточний діагноз має бути встановлений кваліфікованим патологоанатомом.",
    ),
    // Confidence tiers
    ("confidence.very_high", "дуже висока"),
    ("confidence.high", "висока"),
    ("confidence.moderate", "помірна"),
    ("confidence.low", "низька"),
    // Template qualifier fallbacks
    ("qualifier.high", "з високою ймовірністю"),
    ("qualifier.moderate", "з помірною ймовірністю"),
    ("qualifier.low", "з низькою ймовірністю"),
    // Full report
    ("full.title", "АВТОМАТИЗОВАНИЙ АНАЛІЗ ГІСТОПАТОЛОГІЧНОГО ПРЕПАРАТУ"),
    ("full.anatomy", "АНАТОМІЧНА ЛОКАЛІЗАЦІЯ:"),
    ("full.official_name", "Українська назва"),
    ("full.latin_name", "Латинська назва"),
    ("full.topography", "Топографія"),
    ("full.result", "РЕЗУЛЬТАТ АНАЛІЗУ:"),
    ("full.confidence", "Впевненість моделі"),
    ("full.histology", "Гістологічний тип"),
    ("full.grade", "Ступінь диференціювання"),
    ("full.tnm", "TNM"),
    ("full.notes", "ПРИМІТКИ:"),
    ("full.icd11", "Код МКХ-11"),
    ("full.date", "Дата аналізу"),
    ("full.version", "Версія моделі"),
    ("full.disclaimer_title", "ВАЖЛИВЕ ЗАСТЕРЕЖЕННЯ"),
    (
        "full.disclaimer",
        "Цей висновок створено автоматизованою системою аналізу гістопатологічних\n\
         зображень CHIEF (Clinical Histopathology Imaging Evaluation Foundation) та\n\
         є ЛИШЕ ДОПОМІЖНИМ ІНСТРУМЕНТОМ для прийняття клінічних рішень.\n\
         \n\
         ОСТАТОЧНИЙ ДІАГНОЗ має бути встановлений кваліфікованим лікарем-\n\
         патологоанатомом на основі:\n\
         \x20 - Комплексного аналізу всіх клінічних даних\n\
         \x20 - Особистого мікроскопічного дослідження препарату\n\
         \x20 - Додаткових досліджень (при необхідності)\n\
         \x20 - Клініко-анамнестичних даних\n\
         \n\
         Система відповідає вимогам МОЗ України та не замінює професійного\n\
         медичного судження.",
    ),
    // Placeholders
    ("placeholder.unknown_organ", "невідомий орган"),
    ("placeholder.not_specified", "не вказано"),
    ("placeholder.not_determined", "Не визначено"),
    ("placeholder.no_description", "Опис не знайдено"),
    // Terminology summary export
    ("summary.title", "ЗВЕДЕННЯ УКРАЇНСЬКОЇ МЕДИЧНОЇ ТЕРМІНОЛОГІЇ CHIEF"),
    ("summary.metadata", "МЕТАДАНІ:"),
    ("summary.anatomy", "АНАТОМІЧНІ ЛОКАЛІЗАЦІЇ:"),
    ("summary.latin", "Латинська"),
    ("summary.topography", "Топографія"),
    ("summary.icd11", "МКХ-11"),
    ("summary.histology", "ГІСТОЛОГІЧНІ ТИПИ:"),
    ("summary.tnm", "TNM КЛАСИФІКАЦІЯ:"),
    // Reference tables
    ("table.title", "ДОВІДКОВА ТАБЛИЦЯ АНАТОМІЧНИХ ЛОКАЛІЗАЦІЙ"),
    ("table.index", "№"),
    ("table.name", "Українська назва"),
    ("table.latin", "Латинська назва"),
    ("table.icd11", "МКХ-11"),
    ("organs.title", "=== ДОСТУПНІ АНАТОМІЧНІ ЛОКАЛІЗАЦІЇ ==="),
];
