//! Config command - View and validate the applog configuration
//!
//! Provides the `applog config` CLI command which:
//! 1. Shows the effective configuration (YAML or JSON)
//! 2. Validates the configuration file and reports errors

use std::path::Path;

use anyhow::{Context, Result};
use applog_core::config::{Config, ConfigError};
use clap::Subcommand;
use tracing::info;

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Validate configuration file
    Validate,
}

impl ConfigCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        match self {
            ConfigCommand::Show => execute_show(config_path, format),
            ConfigCommand::Validate => execute_validate(config_path, format),
        }
    }
}

fn execute_show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);
    let config = Config::load_or_default(config_path);

    info!(config_path = %config_path.display(), "Showing configuration");

    if matches!(format, OutputFormat::Json) {
        let json =
            serde_json::to_value(&config).context("Failed to serialize configuration to JSON")?;
        formatter.print_json(&json);
    } else {
        formatter.success(&format!("Configuration ({})", config_path.display()));
        formatter.info("");

        let yaml =
            serde_yaml::to_string(&config).context("Failed to serialize configuration to YAML")?;
        for line in yaml.lines() {
            formatter.info(line);
        }
    }

    Ok(())
}

fn execute_validate(config_path: &Path, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);

    match validate_file(config_path) {
        Ok(()) => {
            formatter.success(&format!("Configuration is valid ({})", config_path.display()));
            Ok(())
        }
        Err(ConfigError::Invalid(errors)) => {
            for error in &errors {
                formatter.error(&error.to_string());
            }
            anyhow::bail!("{} validation error(s) found", errors.len())
        }
        Err(e) => Err(e).context("Failed to load configuration"),
    }
}

fn validate_file(config_path: &Path) -> Result<(), ConfigError> {
    Config::load_validated(config_path).map(|_| ())
}
