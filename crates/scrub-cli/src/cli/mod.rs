//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use scrub_core::domain::{Preset, StorageClearOptions, TemplateType, Workflow};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scrub",
    bin_name = "scrub",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Strip example, empty and debug content from structured data",
    long_about = "Scrub cleans JSON and TOML documents: it removes example and \
                  placeholder fields, empty values and environment-specific keys, \
                  and turns filled-in samples into blank templates.",
    after_help = "EXAMPLES:\n\
        \x20 scrub template user.json -t blank\n\
        \x20 scrub preset config.toml production -o config.prod.toml\n\
        \x20 cat payload.json | scrub workflow - api-ready\n\
        \x20 scrub storage snapshot.json --mode safe --dry-run",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean a document with explicit rules.
    #[command(
        about = "Clean a document with explicit rules",
        after_help = "EXAMPLES:\n\
            \x20 scrub clean data.json --remove-null --remove-empty\n\
            \x20 scrub clean data.json --keep name,email\n\
            \x20 scrub clean data.json --options rules.json -o clean.json"
    )]
    Clean(CleanArgs),

    /// Turn a document into a template.
    #[command(
        visible_alias = "t",
        about = "Build a template from a document",
        after_help = "EXAMPLES:\n\
            \x20 scrub template user.json\n\
            \x20 scrub template user.json -t minimal"
    )]
    Template(TemplateArgs),

    /// Apply an environment preset.
    #[command(
        visible_alias = "p",
        about = "Apply an environment preset",
        after_help = "EXAMPLES:\n\
            \x20 scrub preset config.json production\n\
            \x20 scrub preset config.toml dev -o config.dev.toml"
    )]
    Preset(PresetArgs),

    /// Prepare a document for a specific audience.
    #[command(
        visible_alias = "w",
        about = "Run a named workflow",
        after_help = "EXAMPLES:\n\
            \x20 scrub workflow form.json api-ready\n\
            \x20 scrub workflow user.json debug"
    )]
    Workflow(WorkflowArgs),

    /// Deduplicate a top-level array.
    #[command(
        about = "Deduplicate a top-level array",
        after_help = "EXAMPLES:\n\
            \x20 scrub unique tags.json\n\
            \x20 scrub unique nested.json --flatten"
    )]
    Unique(UniqueArgs),

    /// Remove example marker blocks from source files.
    #[command(
        about = "Strip EXAMPLE marker blocks from text files",
        after_help = "EXAMPLES:\n\
            \x20 scrub strip src/config.ts\n\
            \x20 scrub strip templates/ --write"
    )]
    Strip(StripArgs),

    /// Clear a storage snapshot.
    #[command(
        about = "Clear storage areas in a snapshot file",
        after_help = "EXAMPLES:\n\
            \x20 scrub storage snapshot.json\n\
            \x20 scrub storage snapshot.json --mode nuke\n\
            \x20 scrub storage snapshot.json --mode safe --exclude cart --dry-run"
    )]
    Storage(StorageArgs),

    /// Initialise a Scrub configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scrub init           # default location\n\
            \x20 scrub init --local   # .scrub.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scrub completions bash > ~/.local/share/bash-completion/completions/scrub\n\
            \x20 scrub completions zsh  > ~/.zfunc/_scrub\n\
            \x20 scrub completions fish > ~/.config/fish/completions/scrub.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Scrub configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scrub config get defaults.template\n\
            \x20 scrub config list"
    )]
    Config(ConfigCommands),
}

// ── shared document arguments ─────────────────────────────────────────────────

/// Input and output of a document command.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// Input document.
    #[arg(
        value_name = "INPUT",
        help = "Input document (.json, .toml, or - for JSON on stdin)"
    )]
    pub input: PathBuf,

    /// Write the result here instead of stdout. The format follows the
    /// extension.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the result to FILE (.json or .toml)"
    )]
    pub output: Option<PathBuf>,

    /// Single-line JSON output.
    #[arg(long = "compact", help = "Compact output")]
    pub compact: bool,
}

// ── clean ─────────────────────────────────────────────────────────────────────

/// Arguments for `scrub clean`.
#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    #[arg(long = "remove-empty", help = "Drop empty strings and empty arrays")]
    pub remove_empty: bool,

    #[arg(long = "remove-null", help = "Drop null values")]
    pub remove_null: bool,

    #[arg(long = "remove-undefined", help = "Drop undefined values")]
    pub remove_undefined: bool,

    #[arg(
        long = "remove-examples",
        help = "Drop keys starting with example, demo, test, sample or placeholder"
    )]
    pub remove_examples: bool,

    /// Allow-list. Applies at every depth.
    #[arg(
        long = "keep",
        value_name = "FIELD",
        value_delimiter = ',',
        help = "Keep only these keys"
    )]
    pub keep: Option<Vec<String>>,

    /// Deny-list. Wins over `--keep`.
    #[arg(
        long = "remove",
        value_name = "FIELD",
        value_delimiter = ',',
        help = "Always drop these keys"
    )]
    pub remove: Vec<String>,

    /// JSON file of camelCase cleaning options, combined with the flags.
    #[arg(long = "options", value_name = "FILE", help = "Load options from FILE")]
    pub options: Option<PathBuf>,
}

// ── template / preset / workflow / unique ─────────────────────────────────────

/// Arguments for `scrub template`.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Template type (default from config)"
    )]
    pub template: Option<TemplateKind>,
}

/// Arguments for `scrub preset`.
#[derive(Debug, Args)]
pub struct PresetArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    #[arg(value_name = "PRESET", value_enum, help = "Preset (default from config)")]
    pub preset: Option<PresetName>,
}

/// Arguments for `scrub workflow`.
#[derive(Debug, Args)]
pub struct WorkflowArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    #[arg(value_name = "WORKFLOW", value_enum, help = "Workflow to run")]
    pub workflow: WorkflowName,
}

/// Arguments for `scrub unique`.
#[derive(Debug, Args)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    #[arg(long = "flatten", help = "Flatten nested arrays one level first")]
    pub flatten: bool,
}

// ── strip ─────────────────────────────────────────────────────────────────────

/// Arguments for `scrub strip`.
#[derive(Debug, Args)]
pub struct StripArgs {
    #[arg(value_name = "PATH", help = "File or directory")]
    pub path: PathBuf,

    /// Rewrite files in place. Without it a single file is printed to stdout
    /// and a directory is only reported.
    #[arg(long = "write", help = "Rewrite files in place")]
    pub write: bool,
}

// ── storage ───────────────────────────────────────────────────────────────────

/// Arguments for `scrub storage`.
#[derive(Debug, Args)]
pub struct StorageArgs {
    #[arg(value_name = "SNAPSHOT", help = "Storage snapshot JSON file")]
    pub snapshot: PathBuf,

    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "default",
        help = "Which areas to clear"
    )]
    pub mode: StorageMode,

    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "KEY",
        value_delimiter = ',',
        help = "Keys to keep"
    )]
    pub exclude: Vec<String>,

    #[arg(long = "dry-run", help = "List what would be removed without removing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scrub init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.scrub.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scrub completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `scrub config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateKind {
    Blank,
    Minimal,
    Example,
    Full,
}

impl From<TemplateKind> for TemplateType {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Blank => Self::Blank,
            TemplateKind::Minimal => Self::Minimal,
            TemplateKind::Example => Self::Example,
            TemplateKind::Full => Self::Full,
        }
    }
}

/// Environment presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PresetName {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "test")]
    Testing,
    #[value(alias = "prod")]
    Production,
    Blank,
}

impl From<PresetName> for Preset {
    fn from(name: PresetName) -> Self {
        match name {
            PresetName::Development => Self::Development,
            PresetName::Testing => Self::Testing,
            PresetName::Production => Self::Production,
            PresetName::Blank => Self::Blank,
        }
    }
}

/// Named workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum WorkflowName {
    #[value(alias = "api")]
    ApiReady,
    #[value(alias = "form")]
    FormReady,
    Debug,
}

impl From<WorkflowName> for Workflow {
    fn from(name: WorkflowName) -> Self {
        match name {
            WorkflowName::ApiReady => Self::ApiReady,
            WorkflowName::FormReady => Self::FormReady,
            WorkflowName::Debug => Self::Debug,
        }
    }
}

/// Storage clearing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StorageMode {
    /// Local and session storage.
    Default,
    /// Everything, cookies included.
    Nuke,
    /// Local storage and cookies.
    Reset,
    /// Session storage only.
    Session,
    /// Local and session storage, keeping the configured preserve keys.
    Safe,
    /// Local storage only.
    Local,
}

impl StorageMode {
    /// Clear options for this mode. `preserve` is only used by `Safe`.
    pub fn options(self, preserve: &[String]) -> StorageClearOptions {
        match self {
            Self::Default => StorageClearOptions::default(),
            Self::Nuke => StorageClearOptions::nuke(),
            Self::Reset => StorageClearOptions::reset(),
            Self::Session => StorageClearOptions::session(),
            Self::Safe => StorageClearOptions::safe(preserve.iter().cloned()),
            Self::Local => StorageClearOptions::local_only(),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
