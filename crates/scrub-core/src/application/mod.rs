//! Application layer for Scrub.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CleanService, StorageCleaner)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The cleaning rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AreaKind, CleanService, Operation, PlannedRemoval, StorageCleaner};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentStore, StorageArea};

pub use error::ApplicationError;
