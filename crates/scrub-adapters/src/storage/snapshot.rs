//! A JSON file holding the contents of the three storage areas.
//!
//! ```json
//! {
//!   "localStorage": { "theme": "dark", "token": "abc" },
//!   "sessionStorage": { "step": "2" },
//!   "cookies": "sid=1; lang=en"
//! }
//! ```
//!
//! An area missing from the file is unavailable and is skipped when
//! clearing.

use std::{collections::BTreeMap, path::Path};

use chrono::{DateTime, Utc};
use scrub_core::{
    application::{
        ApplicationError, AreaKind, PlannedRemoval, StorageCleaner, ports::StorageArea,
    },
    error::ScrubResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CookieJar, MemoryStorage};

/// Serialized form of the storage areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_storage: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_storage: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
    /// Expiry headers written for removed cookies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expired_cookies: Vec<String>,
    /// Set whenever the snapshot is rebuilt from cleared areas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleared_at: Option<DateTime<Utc>>,
}

/// Live adapters built from a snapshot. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAreas {
    pub local: Option<MemoryStorage>,
    pub session: Option<MemoryStorage>,
    pub cookies: Option<CookieJar>,
}

impl StorageSnapshot {
    pub fn load(path: &Path) -> ScrubResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ApplicationError::DocumentRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let snapshot = serde_json::from_str(&text).map_err(|e| ApplicationError::DocumentParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "Snapshot loaded");
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> ScrubResult<()> {
        let write_error = |reason: String| ApplicationError::DocumentWrite {
            path: path.to_path_buf(),
            reason,
        };
        let mut text = serde_json::to_string_pretty(self).map_err(|e| write_error(e.to_string()))?;
        text.push('\n');
        std::fs::write(path, text).map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }

    /// Adapters over the areas present in this snapshot. The cookie jar
    /// keeps the expiry headers already recorded in the file.
    pub fn areas(&self) -> SnapshotAreas {
        SnapshotAreas {
            local: self.local_storage.clone().map(MemoryStorage::from_iter),
            session: self.session_storage.clone().map(MemoryStorage::from_iter),
            cookies: self.cookies.as_deref().map(|header| {
                CookieJar::parse(header).with_expired(self.expired_cookies.iter().cloned())
            }),
        }
    }
}

impl SnapshotAreas {
    /// A cleaner attached to every present area.
    pub fn cleaner(&self) -> StorageCleaner {
        let mut cleaner = StorageCleaner::new();
        if let Some(local) = &self.local {
            cleaner = cleaner.with_local(Box::new(local.clone()));
        }
        if let Some(session) = &self.session {
            cleaner = cleaner.with_session(Box::new(session.clone()));
        }
        if let Some(cookies) = &self.cookies {
            cleaner = cleaner.with_cookies(Box::new(cookies.clone()));
        }
        cleaner
    }

    /// How many planned keys are gone from their area. Clearing is best
    /// effort, so this can be lower than `plan.len()`.
    pub fn removed(&self, plan: &[PlannedRemoval]) -> ScrubResult<usize> {
        let mut removed = 0;
        for item in plan {
            let area: Option<&dyn StorageArea> = match item.area {
                AreaKind::Local => self.local.as_ref().map(|a| a as &dyn StorageArea),
                AreaKind::Session => self.session.as_ref().map(|a| a as &dyn StorageArea),
                AreaKind::Cookies => self.cookies.as_ref().map(|a| a as &dyn StorageArea),
            };
            let present = match area {
                Some(area) => area.keys()?.contains(&item.key),
                None => false,
            };
            if !present {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Capture the current contents, stamped with the current time.
    pub fn snapshot(&self) -> ScrubResult<StorageSnapshot> {
        Ok(StorageSnapshot {
            local_storage: self.local.as_ref().map(MemoryStorage::entries).transpose()?,
            session_storage: self.session.as_ref().map(MemoryStorage::entries).transpose()?,
            cookies: self.cookies.as_ref().map(CookieJar::header).transpose()?,
            expired_cookies: match &self.cookies {
                Some(jar) => jar.expired()?,
                None => Vec::new(),
            },
            cleared_at: Some(Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::expiry_header;
    use pretty_assertions::assert_eq;
    use scrub_core::domain::StorageClearOptions;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "localStorage": { "theme": "dark", "token": "abc" },
        "cookies": "sid=1; lang=en"
    }"#;

    #[test]
    fn missing_areas_stay_missing() {
        let snapshot: StorageSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let areas = snapshot.areas();
        assert!(areas.session.is_none());

        areas.cleaner().clear(&StorageClearOptions::nuke().exclude(["theme"]));

        let after = areas.snapshot().unwrap();
        assert_eq!(after.session_storage, None);
        assert_eq!(
            after.local_storage,
            Some(BTreeMap::from([("theme".to_string(), "dark".to_string())]))
        );
        assert_eq!(after.cookies.as_deref(), Some(""));
        assert_eq!(after.expired_cookies.len(), 2);
        assert!(after.cleared_at.is_some());
    }

    #[test]
    fn second_clear_keeps_earlier_expiry_headers() {
        let snapshot: StorageSnapshot = serde_json::from_str(SNAPSHOT).unwrap();

        let first = snapshot.areas();
        first.cleaner().clear(&StorageClearOptions::nuke().exclude(["lang"]));
        let once = first.snapshot().unwrap();
        assert_eq!(once.cookies.as_deref(), Some("lang=en"));
        assert_eq!(once.expired_cookies, vec![expiry_header("sid")]);

        let second = once.areas();
        second.cleaner().clear(&StorageClearOptions::nuke());
        let twice = second.snapshot().unwrap();
        assert_eq!(twice.cookies.as_deref(), Some(""));
        assert_eq!(
            twice.expired_cookies,
            vec![expiry_header("sid"), expiry_header("lang")]
        );
    }

    #[test]
    fn removed_counts_only_keys_that_are_gone() {
        let snapshot: StorageSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let areas = snapshot.areas();
        let cleaner = areas.cleaner();
        let plan = cleaner.plan(&StorageClearOptions::reset()).unwrap();
        assert_eq!(plan.len(), 4);
        assert_eq!(areas.removed(&plan).unwrap(), 0);

        areas.local.as_ref().unwrap().remove_item("token").unwrap();
        assert_eq!(areas.removed(&plan).unwrap(), 1);

        cleaner.clear(&StorageClearOptions::reset());
        assert_eq!(areas.removed(&plan).unwrap(), 4);
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let snapshot: StorageSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        snapshot.save(&path).unwrap();
        assert_eq!(StorageSnapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(StorageSnapshot::load(&path).is_err());
    }
}
