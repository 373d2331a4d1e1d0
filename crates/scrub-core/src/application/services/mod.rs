//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "clean a document" or "clear storage".

pub mod clean_service;
pub mod storage_service;

pub use clean_service::{CleanService, Operation};
pub use storage_service::{AreaKind, PlannedRemoval, StorageCleaner};
