//! In-memory document store for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use scrub_core::{
    application::{ApplicationError, ports::DocumentStore},
    domain::Value,
    error::ScrubResult,
};

/// Thread-safe in-memory documents keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocuments {
    inner: Arc<RwLock<HashMap<PathBuf, Value>>>,
}

impl MemoryDocuments {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, value: impl Into<Value>) -> ScrubResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(path.into(), value.into());
        Ok(())
    }

    /// A copy of the document at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<Value> {
        let inner = self.inner.read().ok()?;
        inner.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryDocuments {
    fn read(&self, path: &Path) -> ScrubResult<Value> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::DocumentRead {
                path: path.to_path_buf(),
                reason: "no such document".into(),
            }
            .into()
        })
    }

    fn write(&self, path: &Path, value: &Value, _pretty: bool) -> ScrubResult<()> {
        self.insert(path, value.clone())
    }
}
