//! `scrub preset` - environment presets.

use scrub_core::{application::Operation, domain::Preset, error::ScrubError};

use crate::{cli::PresetArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: PresetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let preset = match args.preset {
        Some(name) => Preset::from(name),
        None => config
            .defaults
            .preset
            .parse::<Preset>()
            .map_err(ScrubError::from)?,
    };

    super::run_document(&args.document, Operation::Preset(preset), &config, &output)
}
