//! Storage Cleaner - best-effort clearing of key/value areas.
//!
//! An area that was never attached stands for an environment that does not
//! provide it and is skipped silently. Adapter failures are logged and
//! skipped; clearing never reports an error to the caller.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::StorageArea,
    domain::StorageClearOptions,
    error::ScrubResult,
};

/// The three areas a [`StorageCleaner`] knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaKind {
    Local,
    Session,
    Cookies,
}

impl AreaKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
            Self::Cookies => "cookies",
        }
    }

    fn selected(self, options: &StorageClearOptions) -> bool {
        match self {
            Self::Local => options.local_storage,
            Self::Session => options.session_storage,
            Self::Cookies => options.cookies,
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key that [`StorageCleaner::clear`] would remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRemoval {
    pub area: AreaKind,
    pub key: String,
}

/// Clears attached storage areas except for excluded keys.
#[derive(Default)]
pub struct StorageCleaner {
    local: Option<Box<dyn StorageArea>>,
    session: Option<Box<dyn StorageArea>>,
    cookies: Option<Box<dyn StorageArea>>,
}

impl StorageCleaner {
    /// A cleaner with no areas attached; every clear is a no-op.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local(mut self, area: Box<dyn StorageArea>) -> Self {
        self.local = Some(area);
        self
    }

    pub fn with_session(mut self, area: Box<dyn StorageArea>) -> Self {
        self.session = Some(area);
        self
    }

    pub fn with_cookies(mut self, area: Box<dyn StorageArea>) -> Self {
        self.cookies = Some(area);
        self
    }

    fn areas(&self) -> [(AreaKind, Option<&dyn StorageArea>); 3] {
        [
            (AreaKind::Local, self.local.as_deref()),
            (AreaKind::Session, self.session.as_deref()),
            (AreaKind::Cookies, self.cookies.as_deref()),
        ]
    }

    /// Remove every key of every selected area that is not excluded.
    ///
    /// Keys are collected before anything is removed, so areas that reindex
    /// on removal are still cleared completely.
    #[instrument(skip_all, fields(
        local = options.local_storage,
        session = options.session_storage,
        cookies = options.cookies,
    ))]
    pub fn clear(&self, options: &StorageClearOptions) {
        for (kind, area) in self.areas() {
            if !kind.selected(options) {
                continue;
            }
            let Some(area) = area else {
                debug!(area = %kind, "Area unavailable, skipping");
                continue;
            };

            let keys = match area.keys() {
                Ok(keys) => keys,
                Err(e) => {
                    warn!(area = %kind, error = %e, "Could not enumerate keys");
                    continue;
                }
            };

            let mut removed = 0_usize;
            for key in keys.iter().filter(|k| !options.is_excluded(k)) {
                match area.remove_item(key) {
                    Ok(()) => removed += 1,
                    Err(e) => warn!(area = %kind, key = %key, error = %e, "Could not remove key"),
                }
            }
            info!(area = %kind, removed, kept = keys.len() - removed, "Area cleared");
        }
    }

    /// The removals [`Self::clear`] would perform, without performing them.
    pub fn plan(&self, options: &StorageClearOptions) -> ScrubResult<Vec<PlannedRemoval>> {
        let mut planned = Vec::new();
        for (kind, area) in self.areas() {
            let Some(area) = area.filter(|_| kind.selected(options)) else {
                continue;
            };
            planned.extend(
                area.keys()?
                    .into_iter()
                    .filter(|k| !options.is_excluded(k))
                    .map(|key| PlannedRemoval { area: kind, key }),
            );
        }
        Ok(planned)
    }
}
