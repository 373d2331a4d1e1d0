//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! cleaning rules. Rule-level errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Failures of the document and storage ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A document could not be read.
    #[error("Failed to read {path}: {reason}")]
    DocumentRead { path: PathBuf, reason: String },

    /// A document was read but is not valid in its format.
    #[error("Failed to parse {path}: {reason}")]
    DocumentParse { path: PathBuf, reason: String },

    /// A document could not be written.
    #[error("Failed to write {path}: {reason}")]
    DocumentWrite { path: PathBuf, reason: String },

    /// The file extension maps to no known document format.
    #[error("Unsupported document format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Storage lock error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocumentRead { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::DocumentParse { path, .. } => vec![
                format!("'{}' is not valid for its format", path.display()),
                "JSON and TOML documents are supported".into(),
            ],
            Self::DocumentWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::UnsupportedFormat { path } => vec![
                format!("Cannot infer a format for {}", path.display()),
                "Use a .json or .toml file, or '-' for JSON on stdin".into(),
            ],
            Self::StoreLockError => vec![
                "The storage area is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentRead { .. } => ErrorCategory::NotFound,
            Self::DocumentParse { .. } | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Validation
            }
            Self::DocumentWrite { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
