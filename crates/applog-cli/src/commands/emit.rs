//! Log and error commands
//!
//! `applog log <MESSAGE>` and `applog error <MESSAGE>` push one event
//! through the facade. With `--metrics` the dispatch counters are printed
//! afterwards.

use std::sync::Arc;

use anyhow::{Context, Result};
use applog_core::{
    config::Config,
    domain::{Severity, Visibility},
};
use applog_facade::LoggingFacade;
use applog_sinks::DispatchMetrics;
use clap::Args;

use crate::commands::build_facade;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct LogCommand {
    /// Message to log
    pub message: String,

    /// Mark the message as public in the local log
    #[arg(long)]
    pub public: bool,

    /// Print dispatch metrics afterwards
    #[arg(long)]
    pub metrics: bool,
}

#[derive(Debug, Args)]
pub struct ErrorCommand {
    /// Error message to report
    pub message: String,

    /// Mark the error as public in the local log
    #[arg(long)]
    pub public: bool,

    /// Print dispatch metrics afterwards
    #[arg(long)]
    pub metrics: bool,
}

fn visibility(public: bool) -> Visibility {
    if public {
        Visibility::Public
    } else {
        Visibility::Private
    }
}

fn setup(
    config: &Config,
    with_metrics: bool,
) -> Result<(LoggingFacade, Option<Arc<DispatchMetrics>>)> {
    let metrics = if with_metrics {
        Some(Arc::new(
            DispatchMetrics::new().context("Failed to create metrics registry")?,
        ))
    } else {
        None
    };
    Ok((build_facade(config, metrics.clone()), metrics))
}

fn finish(
    facade: &LoggingFacade,
    metrics: Option<Arc<DispatchMetrics>>,
    format: OutputFormat,
    kind: Severity,
) -> Result<()> {
    let formatter = get_formatter(format);
    formatter.dispatched(&kind.to_string(), facade.subsystem(), &facade.sink_names());
    if let Some(metrics) = metrics {
        let text = metrics.encode().context("Failed to encode metrics")?;
        formatter.metrics(&text);
    }
    Ok(())
}

impl LogCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let (facade, metrics) = setup(config, self.metrics)?;
        facade.log(&self.message, visibility(self.public));
        finish(&facade, metrics, format, Severity::Log)
    }
}

impl ErrorCommand {
    pub async fn execute(&self, config: &Config, format: OutputFormat) -> Result<()> {
        let (facade, metrics) = setup(config, self.metrics)?;
        let error = anyhow::anyhow!(self.message.clone());
        facade.error(&*error, visibility(self.public));
        finish(&facade, metrics, format, Severity::Error)
    }
}
