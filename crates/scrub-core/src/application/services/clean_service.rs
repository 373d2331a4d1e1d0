//! Clean Service - document-level orchestration.
//!
//! This service coordinates the cleaning workflow:
//! 1. Read a document through the `DocumentStore` port
//! 2. Apply an [`Operation`]
//! 3. Optionally write the result back through the port

use std::fmt;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::DocumentStore,
    domain::{
        CleaningOptions, DebugReport, DomainError, Preset, TemplateType, Value, Workflow,
        apply_workflow, clean_array, clean_object, create_template, flatten, unique,
    },
    error::ScrubResult,
};

/// One transformation of a whole document.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Explicit options.
    Clean(CleaningOptions),
    /// A template type.
    Template(TemplateType),
    /// An environment preset.
    Preset(Preset),
    /// A named workflow. `Debug` produces a report instead of a cleaned copy.
    Workflow(Workflow),
    /// Deduplicate a top-level array, optionally flattening it first.
    Unique { flatten: bool },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean(_) => f.write_str("clean"),
            Self::Template(t) => write!(f, "template:{t}"),
            Self::Preset(p) => write!(f, "preset:{p}"),
            Self::Workflow(w) => write!(f, "workflow:{w}"),
            Self::Unique { flatten: true } => f.write_str("unique+flatten"),
            Self::Unique { flatten: false } => f.write_str("unique"),
        }
    }
}

impl Operation {
    /// Apply to an in-memory document.
    ///
    /// Objects are cleaned directly. Top-level arrays are cleaned element-wise,
    /// dropping elements that end up empty. Other values pass through, except
    /// where the operation needs a specific shape (`debug` needs an object,
    /// `unique` needs an array).
    pub fn apply(&self, document: &Value) -> Result<Value, DomainError> {
        match self {
            Self::Clean(options) => Ok(apply_options(document, options)),
            Self::Template(template) => Ok(match (document, template.options()) {
                (Value::Array(items), Some(options)) => Value::Array(clean_array(items, &options)),
                _ => create_template(document, *template),
            }),
            Self::Preset(preset) => Ok(apply_options(document, &preset.options())),
            Self::Workflow(Workflow::Debug) => match document {
                Value::Object(record) => Ok(DebugReport::new(record).into_value()),
                other => Err(DomainError::UnexpectedShape {
                    expected: "an object",
                    found: other.kind(),
                }),
            },
            Self::Workflow(workflow) => Ok(match document {
                Value::Object(record) => Value::Object(apply_workflow(record, *workflow)),
                other => apply_options(other, &workflow.options()),
            }),
            Self::Unique { flatten: flat } => match document {
                Value::Array(items) if *flat => Ok(Value::Array(unique(&flatten(items)))),
                Value::Array(items) => Ok(Value::Array(unique(items))),
                other => Err(DomainError::UnexpectedShape {
                    expected: "an array",
                    found: other.kind(),
                }),
            },
        }
    }
}

fn apply_options(document: &Value, options: &CleaningOptions) -> Value {
    match document {
        Value::Object(record) => Value::Object(clean_object(record, options)),
        Value::Array(items) => Value::Array(clean_array(items, options)),
        other => other.clone(),
    }
}

/// Main cleaning service.
pub struct CleanService {
    documents: Box<dyn DocumentStore>,
}

impl CleanService {
    /// Create a new clean service with the given document adapter.
    pub fn new(documents: Box<dyn DocumentStore>) -> Self {
        Self { documents }
    }

    /// Read `input` and apply `operation`.
    #[instrument(skip_all, fields(input = %input.as_ref().display(), operation = %operation))]
    pub fn process(&self, input: impl AsRef<Path>, operation: &Operation) -> ScrubResult<Value> {
        let document = self.documents.read(input.as_ref())?;
        debug!(kind = document.kind(), "Document loaded");

        let result = operation.apply(&document)?;
        info!(
            before = size_of_document(&document),
            after = size_of_document(&result),
            "Document processed"
        );
        Ok(result)
    }

    /// Read `input`, apply `operation`, write to `output`.
    #[instrument(skip_all, fields(output = %output.as_ref().display()))]
    pub fn process_to(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        operation: &Operation,
        pretty: bool,
    ) -> ScrubResult<Value> {
        let result = self.process(input, operation)?;
        self.documents.write(output.as_ref(), &result, pretty)?;
        info!("Result written");
        Ok(result)
    }
}

/// Top-level entry count, for logs.
fn size_of_document(value: &Value) -> usize {
    match value {
        Value::Object(record) => record.len(),
        Value::Array(items) => items.len(),
        _ => 1,
    }
}
