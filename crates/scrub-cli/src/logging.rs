//! Tracing subscriber setup for the `scrub` binary.
//!
//! The library crates emit events and `#[instrument]` spans; this is the only
//! place a subscriber is installed. Everything is written to stderr so a
//! cleaned document on stdout can be piped as-is.
//!
//! | Flag(s)   | Level | Extras                          |
//! |-----------|-------|---------------------------------|
//! | (none)    | WARN  |                                 |
//! | `-v`      | INFO  | per-document before/after sizes |
//! | `-vv`     | DEBUG | resolved options, skipped areas |
//! | `-vvv`    | TRACE | every dropped key, span timings |
//! | `--quiet` | ERROR |                                 |
//!
//! `SCRUB_LOG`, then `RUST_LOG`, replace the derived filter when set.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const TARGETS: [&str; 3] = ["scrub", "scrub_core", "scrub_adapters"];

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_env("SCRUB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| default_filter(level));

    // At trace level a closing span reports how long the operation took.
    let span_events = if level == LevelFilter::TRACE {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_span_events(span_events)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Filter enabling `level` for the scrub crates and nothing else.
fn default_filter(level: LevelFilter) -> EnvFilter {
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    EnvFilter::new(directives.join(","))
}

/// `--quiet` wins over any number of `-v`.
fn derive_level(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
