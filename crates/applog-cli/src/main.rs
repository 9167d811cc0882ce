//! applog CLI - Drive the logging facade from the command line
//!
//! Provides commands for:
//! - Emitting a log message through every configured sink
//! - Reporting an error through every configured sink
//! - Showing and validating the configuration
//!
//! Remote backends are replaced by console collaborators that print one
//! JSON line per call, which makes the fan-out visible.

use std::path::PathBuf;

use anyhow::Result;
use applog_core::config::{Config, LogFormat};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod output;

use commands::{
    config::ConfigCommand,
    emit::{ErrorCommand, LogCommand},
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "applog", version, about = "Unified logging facade")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a message through the facade
    Log(LogCommand),
    /// Report an error through the facade
    Error(ErrorCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let config = Config::load_or_default(&config_path);

    init_tracing(&config, cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match cli.command {
        Commands::Log(cmd) => cmd.execute(&config, format).await,
        Commands::Error(cmd) => cmd.execute(&config, format).await,
        Commands::Config(cmd) => cmd.execute(&config_path, format).await,
    }
}

fn init_tracing(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);
    match config.logging.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
