// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The cleaner itself is total and never fails; these errors only come from
/// parsing names (template types, presets, workflows) and from converting
/// foreign data into the value model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    #[error("unknown template type '{0}'")]
    UnknownTemplateType(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("unknown workflow '{0}'")]
    UnknownWorkflow(String),

    // ========================================================================
    // Conversion Errors
    // ========================================================================
    #[error("value cannot be represented: {0}")]
    Unrepresentable(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplateType(name) => vec![
                format!("'{}' is not a template type", name),
                "Available template types: blank, minimal, example, full".into(),
            ],
            Self::UnknownPreset(name) => vec![
                format!("'{}' is not a preset", name),
                "Available presets: development, testing, production, blank".into(),
            ],
            Self::UnknownWorkflow(name) => vec![
                format!("'{}' is not a workflow", name),
                "Available workflows: api-ready, form-ready, debug".into(),
            ],
            Self::UnexpectedShape { expected, .. } => vec![
                format!("The input document must be {}", expected),
                "Check the top-level structure of your input".into(),
            ],
            Self::Unrepresentable(_) => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplateType(_) | Self::UnknownPreset(_) | Self::UnknownWorkflow(_) => {
                ErrorCategory::NotFound
            }
            Self::UnexpectedShape { .. } => ErrorCategory::Validation,
            Self::Unrepresentable(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
