//! Storage area adapters.

mod cookies;
mod memory;
mod snapshot;

pub use cookies::{COOKIE_EXPIRY, CookieJar, expiry_header};
pub use memory::MemoryStorage;
pub use snapshot::{SnapshotAreas, StorageSnapshot};
