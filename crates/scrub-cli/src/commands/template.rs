//! `scrub template` - blank, minimal, example or full templates.

use scrub_core::{application::Operation, domain::TemplateType};

use crate::{cli::TemplateArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: TemplateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template = match args.template {
        Some(kind) => TemplateType::from(kind),
        None => config
            .defaults
            .template
            .parse::<TemplateType>()
            .map_err(scrub_core::error::ScrubError::from)?,
    };

    super::run_document(&args.document, Operation::Template(template), &config, &output)
}
