//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `scrub-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DocumentStore`: Reading and writing structured documents
//!   - `StorageArea`: A key/value area that can be enumerated and cleared
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DocumentStore, StorageArea};

#[cfg(test)]
pub use output::{MockDocumentStore, MockStorageArea};
