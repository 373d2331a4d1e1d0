//! Output management and formatting.
//!
//! Documents go to stdout untouched; status lines go to stderr so they never
//! mix into piped data.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    status: Term,
    data: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stderr().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            status: Term::stderr(),
            data: Term::stdout(),
        }
    }

    // ── Data ──────────────────────────────────────────────────────────────

    /// Raw text on stdout. Never suppressed.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.data.write_str(text)?;
        self.data.flush()
    }

    /// A serializable value as pretty JSON on stdout. Never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to encode output: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.data.write_line(&text)?;
        Ok(())
    }

    // ── Status (stderr, silenced by --quiet) ──────────────────────────────

    /// An unadorned status line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.status_line(None, msg, |t| t.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status_line(Some('\u{2713}'), msg, |t| t.green().to_string())
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status_line(Some('\u{26a0}'), msg, |t| t.yellow().to_string())
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status_line(Some('\u{2139}'), msg, |t| t.blue().to_string())
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.status_line(None, text, |t| t.cyan().bold().to_string())
    }

    fn status_line(
        &self,
        symbol: Option<char>,
        msg: &str,
        paint: fn(&str) -> String,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = match symbol {
            Some(symbol) => format!("{symbol} {msg}"),
            None => msg.to_owned(),
        };
        let line = if self.no_color { text } else { paint(&text) };
        self.status.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
