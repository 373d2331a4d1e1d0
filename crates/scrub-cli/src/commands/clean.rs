//! `scrub clean` - explicit cleaning rules.

use scrub_adapters::LocalDocuments;
use scrub_core::{
    application::{DocumentStore, Operation},
    domain::CleaningOptions,
};
use tracing::debug;

use crate::{
    cli::CleanArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CleanArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args)?;
    debug!(?options, "Cleaning options resolved");

    if options.is_identity() {
        output.warning("No cleaning rules given; the output will equal the input")?;
    }

    super::run_document(&args.document, Operation::Clean(options), &config, &output)
}

/// Options from `--options` (if any) with the flags layered on top.
fn build_options(args: &CleanArgs) -> CliResult<CleaningOptions> {
    let base = match &args.options {
        Some(path) => LocalDocuments::new()
            .read(path)?
            .deserialize_into::<CleaningOptions>()
            .map_err(|source| CliError::OptionsFile {
                path: path.clone(),
                source,
            })?,
        None => CleaningOptions::new(),
    };

    let mut options = CleaningOptions {
        remove_empty: base.remove_empty || args.remove_empty,
        remove_null: base.remove_null || args.remove_null,
        remove_undefined: base.remove_undefined || args.remove_undefined,
        remove_examples: base.remove_examples || args.remove_examples,
        ..base
    }
    .remove_fields(args.remove.iter().cloned());

    if let Some(keep) = &args.keep {
        options = options.keep_only(keep.iter().cloned());
    }
    Ok(options)
}
