//! Cleaning options and the fixed option tables built on top of them.
//!
//! # Tables
//!
//! | Name                   | empty | null | undef | examples | deny-list                                   |
//! |------------------------|:-----:|:----:|:-----:|:--------:|---------------------------------------------|
//! | template `blank`       |   ✓   |  ✓   |   ✓   |    ✓     | example demo test sample                    |
//! | template `minimal`     |   ✓   |      |       |    ✓     |                                             |
//! | template `example/full`|       |      |       |          | (no filtering)                              |
//! | preset `development`   |       |      |       |          |                                             |
//! | preset `testing`       |   ✓   |  ✓   |   ✓   |          |                                             |
//! | preset `production`    |   ✓   |  ✓   |   ✓   |    ✓     | debug test dev development                  |
//! | preset `blank`         |   ✓   |  ✓   |   ✓   |    ✓     | example demo test sample placeholder mock debug |
//! | workflow `api-ready`   |   ✓   |  ✓   |   ✓   |    ✓     | id createdAt updatedAt _temp _draft         |
//! | workflow `form-ready`  |       |      |   ✓   |          | password secret token key                   |
//! | workflow `debug`       |   ✓   |      |       |          |                                             |

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Key prefixes treated as example content, matched case-insensitively.
pub const EXAMPLE_PREFIXES: [&str; 5] = ["example", "demo", "test", "sample", "placeholder"];

const BLANK_TEMPLATE_DENY: &[&str] = &["example", "demo", "test", "sample"];
const PRODUCTION_DENY: &[&str] = &["debug", "test", "dev", "development"];
const BLANK_PRESET_DENY: &[&str] = &[
    "example",
    "demo",
    "test",
    "sample",
    "placeholder",
    "mock",
    "debug",
];
const API_READY_DENY: &[&str] = &["id", "createdAt", "updatedAt", "_temp", "_draft"];
const FORM_READY_DENY: &[&str] = &["password", "secret", "token", "key"];

/// Whether a key name looks like example/demo content.
pub fn is_example_key(key: &str) -> bool {
    EXAMPLE_PREFIXES.iter().any(|prefix| {
        key.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

// ── CleaningOptions ──────────────────────────────────────────────────────────

/// Declarative filter configuration for the cleaner.
///
/// Every toggle is independent and defaults to off; the default value is an
/// identity copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CleaningOptions {
    /// Drop `""` and `[]` values.
    pub remove_empty: bool,
    /// Drop `null` values.
    pub remove_null: bool,
    /// Drop undefined values.
    pub remove_undefined: bool,
    /// Drop keys starting with one of [`EXAMPLE_PREFIXES`].
    pub remove_examples: bool,
    /// Allow-list. When set, only these keys survive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_only_fields: Option<BTreeSet<String>>,
    /// Deny-list. Checked before everything else.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub remove_fields: BTreeSet<String>,
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_empty(mut self, on: bool) -> Self {
        self.remove_empty = on;
        self
    }

    pub fn remove_null(mut self, on: bool) -> Self {
        self.remove_null = on;
        self
    }

    pub fn remove_undefined(mut self, on: bool) -> Self {
        self.remove_undefined = on;
        self
    }

    pub fn remove_examples(mut self, on: bool) -> Self {
        self.remove_examples = on;
        self
    }

    /// Set the allow-list, replacing any previous one.
    pub fn keep_only<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_only_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Extend the deny-list.
    pub fn remove_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Empty, null and undefined removal together.
    pub fn strip_blanks(self) -> Self {
        self.remove_empty(true)
            .remove_null(true)
            .remove_undefined(true)
    }

    /// `true` when no toggle is active.
    pub fn is_identity(&self) -> bool {
        !self.remove_empty
            && !self.remove_null
            && !self.remove_undefined
            && !self.remove_examples
            && self.keep_only_fields.is_none()
            && self.remove_fields.is_empty()
    }
}

// ── TemplateType ─────────────────────────────────────────────────────────────

/// How much example content a template keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Blank,
    Minimal,
    Example,
    Full,
}

impl TemplateType {
    pub const ALL: [Self; 4] = [Self::Blank, Self::Minimal, Self::Example, Self::Full];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Minimal => "minimal",
            Self::Example => "example",
            Self::Full => "full",
        }
    }

    /// Options for this template, or `None` when the template keeps
    /// everything.
    pub fn options(self) -> Option<CleaningOptions> {
        match self {
            Self::Blank => Some(
                CleaningOptions::new()
                    .strip_blanks()
                    .remove_examples(true)
                    .remove_fields(BLANK_TEMPLATE_DENY.iter().copied()),
            ),
            Self::Minimal => Some(
                CleaningOptions::new()
                    .remove_empty(true)
                    .remove_examples(true),
            ),
            Self::Example | Self::Full => None,
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blank" => Ok(Self::Blank),
            "minimal" => Ok(Self::Minimal),
            "example" => Ok(Self::Example),
            "full" => Ok(Self::Full),
            other => Err(DomainError::UnknownTemplateType(other.to_owned())),
        }
    }
}

// ── Preset ───────────────────────────────────────────────────────────────────

/// Environment-oriented cleaning preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Development,
    Testing,
    Production,
    Blank,
}

impl Preset {
    pub const ALL: [Self; 4] = [
        Self::Development,
        Self::Testing,
        Self::Production,
        Self::Blank,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
            Self::Blank => "blank",
        }
    }

    pub fn options(self) -> CleaningOptions {
        match self {
            Self::Development => CleaningOptions::new(),
            Self::Testing => CleaningOptions::new().strip_blanks(),
            Self::Production => CleaningOptions::new()
                .strip_blanks()
                .remove_examples(true)
                .remove_fields(PRODUCTION_DENY.iter().copied()),
            Self::Blank => CleaningOptions::new()
                .strip_blanks()
                .remove_examples(true)
                .remove_fields(BLANK_PRESET_DENY.iter().copied()),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            "blank" => Ok(Self::Blank),
            other => Err(DomainError::UnknownPreset(other.to_owned())),
        }
    }
}

// ── Workflow ─────────────────────────────────────────────────────────────────

/// Named end-to-end preparations of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workflow {
    /// Strip blanks, examples and server-owned fields before submission.
    ApiReady,
    /// Drop undefined values and credentials before display.
    FormReady,
    /// Report original and cleaned side by side.
    Debug,
}

impl Workflow {
    pub const ALL: [Self; 3] = [Self::ApiReady, Self::FormReady, Self::Debug];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApiReady => "api-ready",
            Self::FormReady => "form-ready",
            Self::Debug => "debug",
        }
    }

    /// For `Debug` these are the options of the `cleaned` half of the report.
    pub fn options(self) -> CleaningOptions {
        match self {
            Self::ApiReady => CleaningOptions::new()
                .strip_blanks()
                .remove_examples(true)
                .remove_fields(API_READY_DENY.iter().copied()),
            Self::FormReady => CleaningOptions::new()
                .remove_undefined(true)
                .remove_fields(FORM_READY_DENY.iter().copied()),
            Self::Debug => CleaningOptions::new().remove_empty(true),
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Workflow {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "api-ready" | "api" => Ok(Self::ApiReady),
            "form-ready" | "form" => Ok(Self::FormReady),
            "debug" => Ok(Self::Debug),
            _ => Err(DomainError::UnknownWorkflow(s.to_owned())),
        }
    }
}
