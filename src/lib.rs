// SPDX-License-Identifier: PMPL-1.0-or-later

//! CHIEF terminology: English/Ukrainian anatomical terms and diagnostic
//! report text for the CHIEF histopathology classifier.
//!
//! The crate does not classify anything. It maps the classifier's
//! anatomic index space (0–18) to locale names and renders the
//! classifier's output as human-readable reports.
//!
//! COMPONENTS:
//! 1. **Store**: loads the YAML terminology dataset once and answers
//!    point and reverse lookups (index ↔ name ↔ locale, ICD-11, TNM,
//!    histology, grades, stages, abbreviations).
//! 2. **Report**: renders simple and full diagnosis reports with a
//!    pathologist-confirmation disclaimer, explains TNM codes, exports a
//!    dataset summary and checks certification readiness.
//!
//! ```
//! use chief_terminology::i18n::Lang;
//! use chief_terminology::report::format_simple_diagnosis;
//! use chief_terminology::store::TerminologyStore;
//!
//! let store = TerminologyStore::builtin();
//! assert_eq!(store.lookup_index("товста кишка", Lang::Uk), Some(13));
//!
//! let text = format_simple_diagnosis(
//!     store.lookup_name(13, Lang::Uk).unwrap(),
//!     "Виявлено ознаки злоякісної пухлини",
//!     0.87,
//!     Lang::Uk,
//! )
//! .unwrap();
//! assert!(text.contains("87.0%"));
//! ```

pub mod config;
pub mod error;
pub mod i18n;
pub mod report;
pub mod store;
pub mod types;

pub use config::TerminologyConfig;
pub use error::TerminologyError;
pub use i18n::Lang;
pub use store::TerminologyStore;
