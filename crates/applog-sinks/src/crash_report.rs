//! Crash-report sink
//!
//! Log messages become breadcrumbs on the crash-report session; errors
//! become non-fatal issues carrying the diagnostic context as metadata.

use std::sync::Arc;

use applog_core::{config::CrashReportConfig, domain::DiagnosticContext, ports::ICrashReporter};

use crate::sink::{guarded, Delivery, SinkAdapter};

const SINK_NAME: &str = "crash_report";

/// Adapter over an [`ICrashReporter`]
pub struct CrashReportSink {
    enabled: bool,
    reporter: Arc<dyn ICrashReporter>,
}

impl CrashReportSink {
    /// Creates the sink. It is permanently disabled when the configuration
    /// disables it or carries no application identifier.
    pub fn new(config: &CrashReportConfig, reporter: Arc<dyn ICrashReporter>) -> Self {
        let enabled = config.enabled && !config.app_id.trim().is_empty();
        if config.enabled && !enabled {
            tracing::debug!(sink = SINK_NAME, "No app_id configured; sink disabled");
        }
        Self { enabled, reporter }
    }
}

impl SinkAdapter for CrashReportSink {
    fn name(&self) -> &str {
        SINK_NAME
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn record_log(&self, message: &str) -> Delivery {
        if !self.enabled {
            return Delivery::Skipped;
        }
        guarded(SINK_NAME, "log", || self.reporter.log(message))
    }

    fn record_error(&self, description: &str, context: &DiagnosticContext) -> Delivery {
        if !self.enabled {
            return Delivery::Skipped;
        }
        let metadata = context.to_properties();
        guarded(SINK_NAME, "error", || {
            self.reporter.record(description, &metadata)
        })
    }
}
