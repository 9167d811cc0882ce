//! Analytics sink
//!
//! Each event is tracked under a name built from a purpose prefix and the
//! bundle identifier, e.g. `log.com.example.app` or `error_com.example.app`.

use std::collections::HashMap;
use std::sync::Arc;

use applog_core::{
    config::{AnalyticsSinkConfig, DEFAULT_FALLBACK_SUBSYSTEM},
    domain::DiagnosticContext,
    ports::IAnalyticsClient,
};

use crate::sink::{guarded, Delivery, SinkAdapter};

/// Property carrying the log message
pub const MESSAGE_PROPERTY: &str = "message";

/// Property carrying the error description
pub const DESCRIPTION_PROPERTY: &str = "description";

/// Adapter over an [`IAnalyticsClient`]
pub struct AnalyticsSink {
    name: String,
    enabled: bool,
    log_event: String,
    error_event: String,
    client: Arc<dyn IAnalyticsClient>,
}

impl AnalyticsSink {
    /// Creates the sink. It is permanently disabled when the configuration
    /// disables it or carries no API key.
    ///
    /// A missing or empty `bundle_id` falls back to `"AppLogger"`.
    pub fn new(
        config: &AnalyticsSinkConfig,
        bundle_id: Option<&str>,
        client: Arc<dyn IAnalyticsClient>,
    ) -> Self {
        let id = bundle_id
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_FALLBACK_SUBSYSTEM);
        let enabled = config.enabled && !config.api_key.trim().is_empty();
        if config.enabled && !enabled {
            tracing::debug!(sink = %config.name, "No api_key configured; sink disabled");
        }

        Self {
            name: config.name.clone(),
            enabled,
            log_event: config.naming.event_name("log", id),
            error_event: config.naming.event_name("error", id),
            client,
        }
    }

    pub fn log_event_name(&self) -> &str {
        &self.log_event
    }

    pub fn error_event_name(&self) -> &str {
        &self.error_event
    }
}

impl SinkAdapter for AnalyticsSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn record_log(&self, message: &str) -> Delivery {
        if !self.enabled {
            return Delivery::Skipped;
        }
        let properties = HashMap::from([(MESSAGE_PROPERTY.to_string(), message.to_string())]);
        guarded(&self.name, "log", || {
            self.client.track(&self.log_event, &properties)
        })
    }

    fn record_error(&self, description: &str, context: &DiagnosticContext) -> Delivery {
        if !self.enabled {
            return Delivery::Skipped;
        }
        let mut properties = context.to_properties();
        properties.insert(DESCRIPTION_PROPERTY.to_string(), description.to_string());
        guarded(&self.name, "error", || {
            self.client.track(&self.error_event, &properties)
        })
    }
}
