//! Document adapters and the formats they understand.

mod local;
mod memory;

use std::path::Path;

use scrub_core::{
    application::ApplicationError,
    domain::{Record, Value},
    error::ScrubResult,
};

pub use local::{LocalDocuments, STDIO_PATH};
pub use memory::MemoryDocuments;

/// On-disk document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Infer the format of `path`. Extensions are matched case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Like [`Self::from_path`], failing with `UnsupportedFormat`.
    pub fn require(path: &Path) -> ScrubResult<Self> {
        Self::from_path(path).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    /// Parse `text`. `path` is only used in error messages.
    pub fn parse(self, text: &str, path: &Path) -> ScrubResult<Value> {
        let parse_error = |reason: String| ApplicationError::DocumentParse {
            path: path.to_path_buf(),
            reason,
        };

        match self {
            Self::Json => serde_json::from_str::<serde_json::Value>(text)
                .map(Value::from)
                .map_err(|e| parse_error(e.to_string()).into()),
            Self::Toml => toml::from_str::<toml::Table>(text)
                .map(|table| Value::Object(record_from_toml(table)))
                .map_err(|e| parse_error(e.to_string()).into()),
        }
    }

    /// Render `value` as text ending in a newline.
    ///
    /// TOML has no null, so null and undefined entries are left out; the
    /// top level of a TOML document must be an object.
    pub fn render(self, value: &Value, pretty: bool, path: &Path) -> ScrubResult<String> {
        let write_error = |reason: String| ApplicationError::DocumentWrite {
            path: path.to_path_buf(),
            reason,
        };

        match self {
            Self::Json => {
                let rendered = if pretty {
                    serde_json::to_string_pretty(value)
                } else {
                    serde_json::to_string(value)
                };
                rendered
                    .map(with_trailing_newline)
                    .map_err(|e| write_error(e.to_string()).into())
            }
            Self::Toml => {
                let Some(toml::Value::Table(table)) = value_to_toml(value) else {
                    return Err(write_error(format!(
                        "a TOML document must be an object, not {}",
                        value.kind()
                    ))
                    .into());
                };
                let rendered = if pretty {
                    toml::to_string_pretty(&table)
                } else {
                    toml::to_string(&table)
                };
                rendered
                    .map(with_trailing_newline)
                    .map_err(|e| write_error(e.to_string()).into())
            }
        }
    }
}

fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

fn record_from_toml(table: toml::Table) -> Record {
    table
        .into_iter()
        .map(|(key, value)| (key, value_from_toml(value)))
        .collect()
}

fn value_from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::from(s),
        toml::Value::Integer(n) => Value::from(n),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::from(b),
        toml::Value::Datetime(dt) => Value::from(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(value_from_toml).collect()),
        toml::Value::Table(table) => Value::Object(record_from_toml(table)),
    }
}

fn value_to_toml(value: &Value) -> Option<toml::Value> {
    match value {
        Value::Undefined | Value::Null => None,
        Value::Bool(b) => Some(toml::Value::Boolean(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(toml::Value::Integer)
            .or_else(|| n.as_f64().map(toml::Value::Float)),
        Value::String(s) => Some(toml::Value::String(s.clone())),
        Value::Array(items) => Some(toml::Value::Array(
            items.iter().filter_map(value_to_toml).collect(),
        )),
        Value::Object(record) => Some(toml::Value::Table(
            record
                .iter()
                .filter_map(|(key, value)| value_to_toml(value).map(|v| (key.to_owned(), v)))
                .collect(),
        )),
    }
}
