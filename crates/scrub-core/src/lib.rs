//! Scrub Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Scrub, a
//! record cleaning and templating tool.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            scrub-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (CleanService, StorageCleaner)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │       (DocumentStore, StorageArea)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     scrub-adapters (Infrastructure)     │
//! │  (LocalDocuments, MemoryStorage, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Value, CleaningOptions, cleaner)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use scrub_core::prelude::*;
//! use serde_json::json;
//!
//! let user = Value::from(json!({
//!     "name": "Ada",
//!     "bio": "",
//!     "demoFlag": true,
//!     "settings": { "theme": null }
//! }));
//!
//! let record = user.as_object().unwrap();
//! let cleaned = create_template(&Value::Object(record.clone()), TemplateType::Blank);
//! assert_eq!(cleaned, Value::from(json!({ "name": "Ada" })));
//!
//! let api = clean_object(record, &Workflow::ApiReady.options());
//! assert!(!api.contains_key("demoFlag"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CleanService, Operation, StorageCleaner,
        ports::{DocumentStore, StorageArea},
    };
    pub use crate::domain::{
        CleaningOptions, Preset, Record, StorageClearOptions, TemplateType, Value, Workflow,
        apply_preset, clean_array, clean_object, create_template, shortcuts, unique,
    };
    pub use crate::error::{ScrubError, ScrubResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
