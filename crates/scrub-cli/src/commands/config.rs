//! `scrub config` - inspect configuration values.

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&format!("{value}\n"))?;
        }

        ConfigCommands::List if output.format() == OutputFormat::Json => {
            output.json(&config)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&format!("{}\n", AppConfig::config_path().display()))?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.template" => Ok(config.defaults.template.clone()),
        "defaults.preset" => Ok(config.defaults.preset.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.pretty" => Ok(config.output.pretty.to_string()),
        "storage.preserve_keys" => Ok(config.storage.preserve_keys.join(",")),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.template").unwrap(), "blank");
        assert_eq!(get_config_value(&cfg, "output.pretty").unwrap(), "true");
        assert_eq!(
            get_config_value(&cfg, "storage.preserve_keys").unwrap(),
            "theme,language,user-preferences"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
