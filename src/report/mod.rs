// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod certification;
pub mod confidence;
pub mod formatter;
pub mod summary;

use crate::error::Result;
use crate::store::TerminologyStore;
use std::path::Path;

pub use certification::{validate_certification, CertificationChecks, CertificationReport};
pub use confidence::ConfidenceTier;
pub use formatter::{format_simple_diagnosis, FullReportRequest, ReportFormatter, TnmExplanation};
pub use summary::{SummaryExporter, SummaryFormat};

/// Render a Ukrainian full report dated today.
pub fn format_full_report(store: &TerminologyStore, request: &FullReportRequest) -> Result<String> {
    ReportFormatter::new(store).format_full_report(request)
}

/// Explain a TNM code with Ukrainian fallback text.
pub fn explain_tnm(store: &TerminologyStore, code: &str) -> Result<TnmExplanation> {
    ReportFormatter::new(store).explain_tnm(code)
}

/// Save the Ukrainian text summary of the loaded dataset.
pub fn export_summary<P: AsRef<Path>>(store: &TerminologyStore, path: P) -> anyhow::Result<()> {
    SummaryExporter::new(store).export(path)
}

/// Print the anatomical reference table to stdout.
pub fn print_reference_table(store: &TerminologyStore) {
    SummaryExporter::new(store).print_reference_table();
}
