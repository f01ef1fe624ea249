// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for terminology loading and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the terminology store and report formatter.
///
/// Unknown categories, terms, grades and TNM values are not errors: the
/// formatter substitutes a placeholder or echoes the input instead.
#[derive(Debug, Error)]
pub enum TerminologyError {
    /// The extended dataset has no built-in substitute.
    #[error("terminology file {} not found; make sure the extended terminology is installed", .path.display())]
    DataNotFound { path: PathBuf },

    #[error("malformed terminology data in {}: {message}", .path.display())]
    InvalidData { path: PathBuf, message: String },

    #[error("anatomic index must be between 0 and 18, got {index}")]
    OutOfRange { index: i64 },

    #[error("invalid TNM code {code:?}: expected a component letter followed by a value")]
    InvalidCode { code: String },

    #[error("model confidence must be within [0, 1], got {value}")]
    InvalidConfidence { value: f64 },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TerminologyError>;
