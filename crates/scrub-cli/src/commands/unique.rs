//! `scrub unique` - deduplicate a top-level array.

use scrub_core::application::Operation;

use crate::{cli::UniqueArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: UniqueArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let operation = Operation::Unique {
        flatten: args.flatten,
    };
    super::run_document(&args.document, operation, &config, &output)
}
