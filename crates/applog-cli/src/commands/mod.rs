//! CLI subcommands

pub mod config;
pub mod emit;

use std::sync::Arc;

use applog_core::config::Config;
use applog_facade::{Dispatcher, LoggingFacade};
use applog_sinks::DispatchMetrics;

use crate::console::{ConsoleAnalytics, ConsoleCrashReporter};

/// Build a facade wired to console collaborators for every configured sink.
///
/// With metrics attached, sinks run inline so the counters are complete
/// when the command prints them.
pub fn build_facade(config: &Config, metrics: Option<Arc<DispatchMetrics>>) -> LoggingFacade {
    let mut builder = LoggingFacade::builder(config).crash_reporter(Arc::new(ConsoleCrashReporter));
    for sink in &config.analytics {
        builder = builder.analytics_client(&sink.name, Arc::new(ConsoleAnalytics::new(&sink.name)));
    }
    if let Some(metrics) = metrics {
        builder = builder.metrics(metrics).dispatcher(Dispatcher::Inline);
    }
    builder.build()
}
