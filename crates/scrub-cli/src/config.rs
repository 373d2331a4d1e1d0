//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `SCRUB__SECTION__KEY`
//! 3. The file given with `--config` (must exist)
//! 4. `.scrub.toml` in the current directory (optional)
//! 5. The user config file, see [`AppConfig::config_path`] (optional)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use scrub_core::domain::{DEFAULT_PRESERVED_KEYS, Preset, TemplateType};
use serde::{Deserialize, Serialize};

/// File name of the per-directory config.
pub const LOCAL_CONFIG: &str = ".scrub.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for commands whose mode argument is optional.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Storage clearing settings.
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub template: String,
    pub preset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Keys kept by `scrub storage --mode safe`.
    pub preserve_keys: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                template: TemplateType::default().to_string(),
                preset: Preset::Production.to_string(),
            },
            output: OutputConfig {
                no_color: false,
                pretty: true,
            },
            storage: StorageConfig {
                preserve_keys: DEFAULT_PRESERVED_KEYS.iter().map(|k| k.to_string()).collect(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let mut builder = Config::builder()
            .add_source(defaults)
            .add_source(File::from(Self::config_path()).required(false))
            .add_source(File::from(Path::new(LOCAL_CONFIG)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("SCRUB")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("storage.preserve_keys")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.scrub.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "scrub", "scrub")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }
}
