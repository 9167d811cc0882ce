//! Local log emitter backed by `tracing`
//!
//! Records are emitted under the `applog` target with `subsystem`,
//! `category` and `visibility` fields so subscribers can filter on them.

use applog_core::{
    domain::Severity,
    ports::{ILogEmitter, LogRecord},
};

/// Placeholder emitted instead of a private message.
pub const PRIVATE_PLACEHOLDER: &str = "<private>";

/// [`ILogEmitter`] that forwards records to the active tracing subscriber.
#[derive(Debug, Clone, Copy)]
pub struct TracingEmitter {
    redact_private: bool,
}

impl TracingEmitter {
    /// With `redact_private`, private messages are replaced by `<private>`.
    pub fn new(redact_private: bool) -> Self {
        Self { redact_private }
    }

    fn rendered<'a>(&self, record: &'a LogRecord) -> &'a str {
        if self.redact_private && !record.visibility.is_public() {
            PRIVATE_PLACEHOLDER
        } else {
            &record.message
        }
    }
}

impl Default for TracingEmitter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ILogEmitter for TracingEmitter {
    fn emit(&self, record: &LogRecord) {
        let message = self.rendered(record);
        match record.severity {
            Severity::Log => tracing::info!(
                target: "applog",
                subsystem = %record.subsystem,
                category = %record.category,
                visibility = %record.visibility,
                "{message}"
            ),
            Severity::Error => tracing::error!(
                target: "applog",
                subsystem = %record.subsystem,
                category = %record.category,
                visibility = %record.visibility,
                "{message}"
            ),
        }
    }
}
