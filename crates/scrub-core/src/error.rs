//! The error type returned by every fallible operation in `scrub-core`.
//!
//! Cleaning itself never fails. Errors come from parsing names and shapes
//! ([`DomainError`]) or from going through a port ([`ApplicationError`]).

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum ScrubError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ScrubError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification used by front ends to pick exit codes and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input was understood but is not acceptable.
    Validation,
    /// A named template, preset, workflow or file does not exist.
    NotFound,
    Internal,
}

pub type ScrubResult<T> = Result<T, ScrubError>;
