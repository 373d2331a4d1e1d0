//! In-memory key/value storage area.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use scrub_core::{
    application::{ApplicationError, ports::StorageArea},
    error::ScrubResult,
};
use tracing::trace;

/// Thread-safe string key/value area, the shape of a browser's local or
/// session store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new empty area.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) -> ScrubResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(key.into(), value.into());
        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of every entry.
    pub fn entries(&self) -> ScrubResult<BTreeMap<String, String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }
}

impl FromIterator<(String, String)> for MemoryStorage {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: Arc::new(RwLock::new(iter.into_iter().collect())),
        }
    }
}

impl StorageArea for MemoryStorage {
    fn keys(&self) -> ScrubResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.keys().cloned().collect())
    }

    fn remove_item(&self, key: &str) -> ScrubResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        if inner.remove(key).is_some() {
            trace!(key, "removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let area = MemoryStorage::new();
        area.set_item("theme", "dark").unwrap();
        assert_eq!(area.get_item("theme").as_deref(), Some("dark"));

        area.remove_item("theme").unwrap();
        assert!(area.is_empty());
        area.remove_item("theme").unwrap();
    }

    #[test]
    fn keys_are_a_snapshot() {
        let area: MemoryStorage = [("a".to_string(), "1".to_string()), ("b".into(), "2".into())]
            .into_iter()
            .collect();
        let keys = area.keys().unwrap();
        for key in &keys {
            area.remove_item(key).unwrap();
        }
        assert_eq!(keys, vec!["a", "b"]);
        assert!(area.is_empty());
    }
}
