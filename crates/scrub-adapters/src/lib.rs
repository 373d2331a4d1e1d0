//! Infrastructure adapters for Scrub.
//!
//! This crate implements the ports defined in `scrub-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod documents;
pub mod storage;

// Re-export commonly used adapters
pub use documents::{Format, LocalDocuments, MemoryDocuments};
pub use storage::{CookieJar, MemoryStorage, SnapshotAreas, StorageSnapshot};
