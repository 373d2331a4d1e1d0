// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Scrub.
//!
//! Pure logic only. All I/O (documents on disk, browser-like storage areas)
//! is reached through ports defined in the application layer.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **No shared state**: every call allocates its own output
//! - **Immutable inputs**: the cleaner never mutates what it is given

pub mod cleaner;
pub mod error;
pub mod markers;
pub mod options;
pub mod shortcuts;
pub mod storage;
pub mod value;

pub use cleaner::{
    apply_preset, apply_workflow, clean_array, clean_object, clean_value, create_template,
    flatten, unique,
};
pub use error::{DomainError, ErrorCategory};
pub use markers::{has_example_markers, strip_example_content};
pub use options::{CleaningOptions, EXAMPLE_PREFIXES, Preset, TemplateType, Workflow, is_example_key};
pub use shortcuts::workflows::DebugReport;
pub use storage::{DEFAULT_PRESERVED_KEYS, StorageClearOptions};
pub use value::{Record, Value};
