// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale handling for terminology lookups and report text.
//!
//! | Code | Language  |
//! |------|-----------|
//! | uk   | Ukrainian |
//! | en   | English   |
//!
//! Message keys use dotted namespaces: `"full.title"`, `"confidence.high"`,
//! `"summary.metadata"`. Lookups fall back to English when a key is missing
//! in Ukrainian, and to `""` when it is missing in English too.

mod catalog;

pub use catalog::{t, Lang};
