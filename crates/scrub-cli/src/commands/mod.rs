//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print results. No
//! cleaning rules live here.

pub mod clean;
pub mod completions;
pub mod config;
pub mod init;
pub mod preset;
pub mod storage;
pub mod strip;
pub mod template;
pub mod unique;
pub mod workflow;

use std::path::Path;

use scrub_adapters::{Format, LocalDocuments, documents::STDIO_PATH};
use scrub_core::application::{CleanService, Operation};
use tracing::instrument;

use crate::{cli::DocumentArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run `operation` over the input document and emit the result, either to
/// `--output` or as JSON on stdout.
#[instrument(skip_all, fields(input = %args.input.display(), %operation))]
pub(crate) fn run_document(
    args: &DocumentArgs,
    operation: Operation,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = CleanService::new(Box::new(LocalDocuments::new()));
    let pretty = config.output.pretty && !args.compact;

    match &args.output {
        Some(path) => {
            service.process_to(&args.input, path, &operation, pretty)?;
            if path.as_os_str() != STDIO_PATH {
                output.success(&format!("Wrote {}", path.display()))?;
            }
        }
        None => {
            let result = service.process(&args.input, &operation)?;
            let text = Format::Json.render(&result, pretty, Path::new(STDIO_PATH))?;
            output.data(&text)?;
        }
    }

    Ok(())
}
