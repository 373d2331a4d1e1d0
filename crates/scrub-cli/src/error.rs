//! Errors surfaced by the `scrub` binary.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code, a few
//! suggestions for the user, and how to render itself on stderr.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use scrub_core::{domain::DomainError, error::ScrubError};

pub use scrub_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments parsed but cannot be acted on.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// `clean --options FILE` parsed, but is not a set of cleaning options.
    #[error("'{path}' is not a valid options file")]
    OptionsFile {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// A path given on the command line does not exist.
    #[error("No such file or directory: {path}")]
    PathNotFound { path: PathBuf },

    /// Configuration could not be loaded, encoded or looked up.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything coming out of `scrub-core` or the adapters.
    #[error("{0}")]
    Core(#[from] ScrubError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::OptionsFile { .. } => vec![
                "Options use camelCase keys: removeEmpty, removeNull, removeUndefined,".into(),
                "removeExamples (booleans), keepOnlyFields and removeFields (string lists)".into(),
            ],
            Self::PathNotFound { path } => vec![
                format!("'{}' does not exist", path.display()),
                "Check the path and try again".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Run 'scrub config path' to locate the user config file".into(),
                "Run 'scrub init --force' to recreate a default config".into(),
                "Check SCRUB__* environment variables".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::OptionsFile { .. } => ErrorCategory::UserError,
            Self::PathNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// 2 user error, 3 not found, 4 configuration, 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error report for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Error report without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{}\n  {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("Caused by: {err}");
                out.push_str(&format!("  {}\n", paint(&line, |t| t.dimmed().to_string())));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }
        out
    }

    /// Record the failure in the log before it is printed.
    pub fn log(&self) {
        let category = self.category();
        let cause = self.source().map(ToString::to_string);
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, cause, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, cause, "{self}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a message to an I/O failure at the call site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}
