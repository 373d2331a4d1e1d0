//! Storage-clearing options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Keys kept by [`StorageClearOptions::safe`] when no list is given.
pub const DEFAULT_PRESERVED_KEYS: [&str; 3] = ["theme", "language", "user-preferences"];

/// Which storage areas to clear, and which keys to leave in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageClearOptions {
    pub local_storage: bool,
    pub session_storage: bool,
    pub cookies: bool,
    pub exclude_keys: BTreeSet<String>,
}

impl Default for StorageClearOptions {
    /// Local and session storage, no cookies, nothing excluded.
    fn default() -> Self {
        Self {
            local_storage: true,
            session_storage: true,
            cookies: false,
            exclude_keys: BTreeSet::new(),
        }
    }
}

impl StorageClearOptions {
    /// Every area, cookies included.
    pub fn nuke() -> Self {
        Self {
            cookies: true,
            ..Self::default()
        }
    }

    /// Persistent state only: local storage and cookies.
    pub fn reset() -> Self {
        Self {
            local_storage: true,
            session_storage: false,
            cookies: true,
            exclude_keys: BTreeSet::new(),
        }
    }

    /// Session storage only.
    pub fn session() -> Self {
        Self {
            local_storage: false,
            session_storage: true,
            cookies: false,
            exclude_keys: BTreeSet::new(),
        }
    }

    /// Local storage only.
    pub fn local_only() -> Self {
        Self {
            local_storage: true,
            session_storage: false,
            cookies: false,
            exclude_keys: BTreeSet::new(),
        }
    }

    /// Local and session storage, keeping `preserve`.
    pub fn safe<I, S>(preserve: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().exclude(preserve)
    }

    /// [`Self::safe`] with [`DEFAULT_PRESERVED_KEYS`].
    pub fn safe_default() -> Self {
        Self::safe(DEFAULT_PRESERVED_KEYS)
    }

    /// Add keys to the exclusion set.
    pub fn exclude<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded(&self, key: &str) -> bool {
        self.exclude_keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skips_cookies() {
        let opts = StorageClearOptions::default();
        assert!(opts.local_storage && opts.session_storage);
        assert!(!opts.cookies);
        assert!(opts.exclude_keys.is_empty());
    }

    #[test]
    fn shortcut_areas() {
        let nuke = StorageClearOptions::nuke();
        assert!(nuke.local_storage && nuke.session_storage && nuke.cookies);

        let reset = StorageClearOptions::reset();
        assert!(reset.local_storage && !reset.session_storage && reset.cookies);

        let session = StorageClearOptions::session();
        assert!(!session.local_storage && session.session_storage && !session.cookies);
    }

    #[test]
    fn safe_default_preserves_preferences() {
        let opts = StorageClearOptions::safe_default();
        for key in DEFAULT_PRESERVED_KEYS {
            assert!(opts.is_excluded(key));
        }
        assert!(!opts.cookies);
    }
}
