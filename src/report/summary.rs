// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminology summary export and printed reference tables

use crate::i18n::{t, Lang};
use crate::store::TerminologyStore;
use crate::types::{AnatomicEntry, HistologicalType, TnmComponent};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 80;
const TABLE_WIDTH: usize = 100;

/// Canonical TNM component order; other components follow alphabetically.
const TNM_ORDER: [&str; 3] = ["T", "N", "M"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
    Yaml,
}

impl SummaryFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(SummaryFormat::Text),
            "json" => Some(SummaryFormat::Json),
            "yaml" | "yml" => Some(SummaryFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SummaryFormat::Text => "txt",
            SummaryFormat::Json => "json",
            SummaryFormat::Yaml => "yaml",
        }
    }
}

/// Structured projection used by the JSON and YAML formats.
#[derive(Serialize)]
struct SummaryDocument<'a> {
    metadata: &'a serde_yaml::Mapping,
    anatomic: Vec<AnatomicEntry>,
    #[serde(serialize_with = "serialize_entries")]
    histological_types: &'a [(String, HistologicalType)],
    tnm_staging: &'a BTreeMap<String, TnmComponent>,
}

pub struct SummaryExporter<'a> {
    store: &'a TerminologyStore,
    lang: Lang,
}

impl<'a> SummaryExporter<'a> {
    pub fn new(store: &'a TerminologyStore) -> Self {
        Self {
            store,
            lang: Lang::Uk,
        }
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Metadata, anatomic list, histological types and TNM structure, in
    /// that order.
    pub fn render(&self) -> String {
        let lang = self.lang;
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            t(lang, "summary.title").to_string(),
            rule.clone(),
            String::new(),
            t(lang, "summary.metadata").to_string(),
        ];
        for (key, value) in self.store.metadata() {
            lines.push(format!("  {}: {}", scalar_text(key), scalar_text(value)));
        }
        lines.push(String::new());

        lines.push(t(lang, "summary.anatomy").to_string());
        for entry in self.store.list_all(lang) {
            lines.push(String::new());
            lines.push(format!("{}. {}", entry.index, entry.name(lang).to_uppercase()));
            lines.push(format!("   {}: {}", t(lang, "summary.latin"), entry.latin));
            lines.push(format!("   {}: {}", t(lang, "summary.topography"), entry.topography));
            lines.push(format!("   {}: {}", t(lang, "summary.icd11"), entry.icd11));
        }

        lines.push(String::new());
        lines.push(rule.clone());
        lines.push(t(lang, "summary.histology").to_string());
        lines.push(String::new());
        for (_, hist) in &self.store.dataset().histological_types {
            lines.push(format!(
                "  {} ({}) - SNOMED: {}",
                hist.label(lang),
                hist.lat,
                hist.snomed
            ));
        }

        lines.push(String::new());
        lines.push(rule);
        lines.push(t(lang, "summary.tnm").to_string());
        lines.push(String::new());
        for (tag, component) in ordered_tnm(&self.store.dataset().tnm_staging) {
            lines.push(format!("{} - {}:", tag, component.name));
            for (value, description) in &component.values {
                lines.push(format!("  {}: {}", value, description));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    pub fn render_as(&self, format: SummaryFormat) -> Result<String> {
        match format {
            SummaryFormat::Text => Ok(self.render()),
            SummaryFormat::Json => Ok(serde_json::to_string_pretty(&self.document())?),
            SummaryFormat::Yaml => Ok(serde_yaml::to_string(&self.document())?),
        }
    }

    pub fn write_to<W: Write>(&self, mut sink: W, format: SummaryFormat) -> Result<()> {
        let content = self.render_as(format)?;
        sink.write_all(content.as_bytes())
            .context("writing terminology summary")?;
        sink.flush().context("flushing terminology summary")?;
        Ok(())
    }

    /// Write the text summary as UTF-8 to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.export_as(path, SummaryFormat::Text)
    }

    pub fn export_as<P: AsRef<Path>>(&self, path: P, format: SummaryFormat) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.write_to(BufWriter::new(file), format)
            .with_context(|| format!("exporting summary to {}", path.display()))?;
        log::info!("terminology summary saved to {}", path.display());
        Ok(())
    }

    /// Fixed-width table of index, official name, latin name and ICD-11 code.
    pub fn render_reference_table(&self) -> String {
        let lang = self.lang;
        let rule = "=".repeat(TABLE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            t(lang, "table.title").to_string(),
            rule.clone(),
            format!(
                "{:<4} {:<25} {:<35} {:<10}",
                t(lang, "table.index"),
                t(lang, "table.name"),
                t(lang, "table.latin"),
                t(lang, "table.icd11")
            ),
            "-".repeat(TABLE_WIDTH),
        ];
        for entry in self.store.list_all(lang) {
            lines.push(format!(
                "{:<4} {:<25} {:<35} {:<10}",
                entry.index,
                entry.name(lang),
                entry.latin,
                entry.icd11
            ));
        }
        lines.push(rule);
        lines.join("\n") + "\n"
    }

    pub fn print_reference_table(&self) {
        let table = self.render_reference_table();
        let title = t(self.lang, "table.title");
        for line in table.lines() {
            if line == title {
                println!("{}", line.bold().cyan());
            } else {
                println!("{}", line);
            }
        }
    }

    /// `NN. name` lines from the locale's name table, ascending by index.
    pub fn render_organ_list(&self) -> String {
        let mut organs: Vec<(&String, &u8)> = self.store.organs(self.lang).iter().collect();
        organs.sort_by_key(|(_, index)| **index);

        let mut lines = vec![t(self.lang, "organs.title").to_string(), String::new()];
        for (name, index) in organs {
            lines.push(format!("{:2}. {}", index, name));
        }
        lines.join("\n") + "\n"
    }

    pub fn print_organ_list(&self) {
        let list = self.render_organ_list();
        let mut lines = list.lines();
        if let Some(title) = lines.next() {
            println!("\n{}", title.bold().yellow());
        }
        for line in lines {
            println!("{}", line);
        }
    }

    fn document(&self) -> SummaryDocument<'a> {
        let dataset = self.store.dataset();
        SummaryDocument {
            metadata: &dataset.metadata,
            anatomic: self.store.list_all(self.lang),
            histological_types: &dataset.histological_types,
            tnm_staging: &dataset.tnm_staging,
        }
    }
}

fn serialize_entries<S: serde::Serializer>(
    entries: &&[(String, HistologicalType)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

fn ordered_tnm(staging: &BTreeMap<String, TnmComponent>) -> Vec<(&str, &TnmComponent)> {
    let mut ordered: Vec<(&str, &TnmComponent)> = TNM_ORDER
        .iter()
        .filter_map(|tag| staging.get_key_value(*tag))
        .map(|(tag, component)| (tag.as_str(), component))
        .collect();
    ordered.extend(
        staging
            .iter()
            .filter(|(tag, _)| !TNM_ORDER.contains(&tag.as_str()))
            .map(|(tag, component)| (tag.as_str(), component)),
    );
    ordered
}

/// Inline text for a metadata value; nested values are rendered as JSON.
fn scalar_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{builtin_dataset, Dataset, Variant};

    fn store_with_tnm() -> TerminologyStore {
        let mut dataset = builtin_dataset();
        dataset.metadata.insert("version".into(), "2.0".into());
        for (tag, name) in [("M", "Віддалені метастази"), ("T", "Первинна пухлина"), ("N", "Лімфовузли")] {
            dataset.tnm_staging.insert(
                tag.to_string(),
                TnmComponent {
                    name: name.to_string(),
                    values: BTreeMap::new(),
                },
            );
        }
        TerminologyStore::from_dataset(dataset, Variant::Basic).unwrap()
    }

    #[test]
    fn text_summary_section_order() {
        let store = store_with_tnm();
        let text = SummaryExporter::new(&store).render();
        let metadata = text.find("МЕТАДАНІ:").unwrap();
        let anatomy = text.find("АНАТОМІЧНІ ЛОКАЛІЗАЦІЇ:").unwrap();
        let histology = text.find("ГІСТОЛОГІЧНІ ТИПИ:").unwrap();
        let tnm = text.find("TNM КЛАСИФІКАЦІЯ:").unwrap();
        assert!(metadata < anatomy && anatomy < histology && histology < tnm);
        assert!(text.contains("  version: 2.0"));
        assert!(text.contains("13. ТОВСТА КИШКА"));
    }

    #[test]
    fn summary_keeps_document_order() {
        let yaml = "Metadata:\n  version: '2.0'\n  date: 2024-01-01\n  author: МОЗ\n\
                    Histological_Types:\n  squamous_cell_carcinoma:\n    uk: плоскоклітинна карцинома\n    lat: carcinoma planocellulare\n    snomed: '28899001'\n  \
                    adenocarcinoma:\n    uk: аденокарцинома\n    lat: adenocarcinoma\n    snomed: '35917007'\n";
        let dataset = Dataset::from_yaml_str(yaml, Path::new("inline.yaml")).unwrap();
        let store = TerminologyStore::from_dataset(dataset, Variant::Extended).unwrap();

        let text = SummaryExporter::new(&store).render();
        let version = text.find("  version: 2.0").unwrap();
        let date = text.find("  date: 2024-01-01").unwrap();
        let author = text.find("  author: МОЗ").unwrap();
        assert!(version < date && date < author);
        let squamous = text.find("плоскоклітинна карцинома").unwrap();
        let adeno = text.find("аденокарцинома (adenocarcinoma)").unwrap();
        assert!(squamous < adeno);

        let json = SummaryExporter::new(&store).render_as(SummaryFormat::Json).unwrap();
        assert!(json.find("squamous_cell_carcinoma").unwrap() < json.find("\"adenocarcinoma\"").unwrap());
        assert_eq!(store.histological_type("adenocarcinoma").unwrap().snomed, "35917007");
    }

    #[test]
    fn tnm_components_in_canonical_order() {
        let store = store_with_tnm();
        let text = SummaryExporter::new(&store).render();
        let t = text.find("T - Первинна пухлина:").unwrap();
        let n = text.find("N - Лімфовузли:").unwrap();
        let m = text.find("M - Віддалені метастази:").unwrap();
        assert!(t < n && n < m);
    }

    #[test]
    fn json_summary_is_structured() {
        let store = store_with_tnm();
        let json = SummaryExporter::new(&store)
            .render_as(SummaryFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["version"], "2.0");
        assert_eq!(value["anatomic"].as_array().unwrap().len(), 19);
        assert!(value["tnm_staging"]["T"].is_object());
    }

    #[test]
    fn organ_list_sorted_by_index() {
        let store = TerminologyStore::builtin();
        let list = SummaryExporter::new(&store).with_lang(Lang::En).render_organ_list();
        assert!(list.starts_with("=== AVAILABLE ANATOMICAL LOCATIONS ==="));
        let brain = list.find(" 0. brain").unwrap();
        let colon = list.find("13. colon").unwrap();
        let soft = list.find("18. soft tissue").unwrap();
        assert!(brain < colon && colon < soft);
    }

    #[test]
    fn reference_table_has_row_per_site() {
        let store = TerminologyStore::builtin();
        let table = SummaryExporter::new(&store).render_reference_table();
        assert!(table.contains("ДОВІДКОВА ТАБЛИЦЯ АНАТОМІЧНИХ ЛОКАЛІЗАЦІЙ"));
        let rows = table
            .lines()
            .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .count();
        assert_eq!(rows, 19);
    }

    #[test]
    fn summary_format_parse() {
        assert_eq!(SummaryFormat::parse("YML"), Some(SummaryFormat::Yaml));
        assert_eq!(SummaryFormat::parse("txt"), Some(SummaryFormat::Text));
        assert_eq!(SummaryFormat::parse("xml"), None);
        assert_eq!(SummaryFormat::Json.extension(), "json");
    }
}
