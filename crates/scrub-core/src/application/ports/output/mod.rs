//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scrub-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Value;
use crate::error::ScrubResult;

/// Port for structured documents.
///
/// Implemented by:
/// - `scrub_adapters::documents::LocalDocuments` (JSON/TOML files)
/// - `scrub_adapters::documents::MemoryDocuments` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Read and parse the document at `path`.
    fn read(&self, path: &Path) -> ScrubResult<Value>;

    /// Serialize `value` to `path`, pretty-printed or compact.
    fn write(&self, path: &Path, value: &Value, pretty: bool) -> ScrubResult<()>;
}

/// Port for a key/value storage area (local store, session store, cookies).
///
/// Implemented by:
/// - `scrub_adapters::storage::MemoryStorage`
/// - `scrub_adapters::storage::CookieJar`
#[cfg_attr(test, mockall::automock)]
pub trait StorageArea: Send + Sync {
    /// Snapshot of the keys currently held.
    fn keys(&self) -> ScrubResult<Vec<String>>;

    /// Remove (or expire) a single key. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> ScrubResult<()>;
}
