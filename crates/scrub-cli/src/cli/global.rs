//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Flattened into [`super::Cli`]; every field is `global = true`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)",
        long_help = "More log output on stderr:
    (none)  - warnings and errors
    -v      - one summary line per document
    -vv     - resolved options and skipped storage areas
    -vvv    - every dropped key, with span timings"
    )]
    pub verbose: u8,

    /// Status lines are silenced; documents and `--dry-run` listings are not.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print results and errors"
    )]
    pub quiet: bool,

    /// Also set by a `NO_COLOR` environment variable (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Layered above the user and `.scrub.toml` files; must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "SCRUB_CONFIG",
        value_name = "FILE",
        help = "Extra configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Applies to listings (`strip`, `storage --dry-run`, `config list`).
    /// Cleaned documents are always JSON or TOML.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Auto,
        help = "Format of listings and status output"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of listings and status lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured, with status symbols.
    Human,
    /// No colour; one item per line.
    Plain,
    /// A JSON array or object on stdout.
    Json,
}
