//! `scrub` - clean JSON and TOML documents from the command line.
//!
//! Documents go to stdout (or `-o FILE`); status lines, logs and error
//! reports go to stderr. Exit codes: 0 success, 1 internal failure, 2 bad
//! input, 3 something named on the command line or in config was not found,
//! 4 configuration problem.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // `.env` may carry SCRUB__* overrides and SCRUB_LOG, so it goes first.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let report = ErrorReport {
        verbose: cli.global.verbose > 0,
        color: !cli.global.no_color && std::io::stderr().is_terminal(),
    };
    debug!(command = ?cli.command, "Arguments parsed");

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return report.emit(CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            });
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli.command, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report.emit(e),
    }
}

#[instrument(skip_all)]
fn run(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Clean(cmd) => commands::clean::execute(cmd, config, output),
        Commands::Template(cmd) => commands::template::execute(cmd, config, output),
        Commands::Preset(cmd) => commands::preset::execute(cmd, config, output),
        Commands::Workflow(cmd) => commands::workflow::execute(cmd, config, output),
        Commands::Unique(cmd) => commands::unique::execute(cmd, config, output),
        Commands::Strip(cmd) => commands::strip::execute(cmd, output),
        Commands::Storage(cmd) => commands::storage::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// How a failure is shown on stderr.
struct ErrorReport {
    verbose: bool,
    color: bool,
}

impl ErrorReport {
    fn emit(&self, err: CliError) -> ExitCode {
        err.log();
        let msg = if self.color {
            err.format_colored(self.verbose)
        } else {
            err.format_plain(self.verbose)
        };
        eprint!("{msg}");
        ExitCode::from(err.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
