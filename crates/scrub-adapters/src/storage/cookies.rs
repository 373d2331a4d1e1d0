//! Cookie jar modelled on a `document.cookie` header.
//!
//! Cookies cannot be deleted directly; they are expired by writing a header
//! with a past expiry date. The jar keeps those headers so callers can replay
//! them against a real cookie store.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use scrub_core::{
    application::{ApplicationError, ports::StorageArea},
    error::ScrubResult,
};
use tracing::trace;

/// `expires` attribute format of a Set-Cookie header.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The instant every expiry header points at.
pub const COOKIE_EXPIRY: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

#[derive(Debug, Default)]
struct Jar {
    live: Vec<(String, String)>,
    expired: Vec<String>,
}

/// Thread-safe cookie jar.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    inner: Arc<RwLock<Jar>>,
}

impl CookieJar {
    /// Create a new empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `name=value; name2=value2` header. Names and values are
    /// trimmed; segments with an empty name are ignored and a repeated name
    /// keeps its last value.
    pub fn parse(header: &str) -> Self {
        let mut live: Vec<(String, String)> = Vec::new();
        for segment in header.split(';') {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match live.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = value.trim().to_owned(),
                None => live.push((name.to_owned(), value.trim().to_owned())),
            }
        }
        Self {
            inner: Arc::new(RwLock::new(Jar {
                live,
                expired: Vec::new(),
            })),
        }
    }

    /// Carry over expiry headers recorded by an earlier clear. New headers
    /// are appended after them.
    pub fn with_expired(self, headers: impl IntoIterator<Item = String>) -> Self {
        if let Ok(mut jar) = self.inner.write() {
            jar.expired.extend(headers);
        }
        self
    }

    /// The live cookies as a header, in original order.
    pub fn header(&self) -> ScrubResult<String> {
        let jar = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(jar
            .live
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; "))
    }

    /// Expiry headers written so far, oldest first.
    pub fn expired(&self) -> ScrubResult<Vec<String>> {
        let jar = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(jar.expired.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|jar| jar.live.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The header that expires `name` at the root path.
pub fn expiry_header(name: &str) -> String {
    format!(
        "{name}=;expires={};path=/",
        COOKIE_EXPIRY.format(HTTP_DATE)
    )
}

impl StorageArea for CookieJar {
    fn keys(&self) -> ScrubResult<Vec<String>> {
        let jar = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(jar.live.iter().map(|(name, _)| name.clone()).collect())
    }

    fn remove_item(&self, key: &str) -> ScrubResult<()> {
        let mut jar = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        jar.live.retain(|(name, _)| name != key);
        jar.expired.push(expiry_header(key));
        trace!(cookie = key, "expired");
        Ok(())
    }
}
