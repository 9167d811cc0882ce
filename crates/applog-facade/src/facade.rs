//! LoggingFacade - the single call site for logs and errors
//!
//! Every event is first written to the local log, then handed to each
//! enabled sink exactly once. For errors the diagnostic context is
//! computed once and the same `Arc` is shared by every sink.
//!
//! All state is fixed at construction, so the facade can be shared
//! across threads without locking. Sink failures and panics are
//! contained per sink and never reach the caller.

use std::error::Error as StdError;
use std::sync::Arc;

use applog_core::{
    attribution::{BacktraceAttributor, DiagnosticContextProvider},
    config::Config,
    domain::{DiagnosticContext, Event, Severity, Visibility},
    ports::{IAnalyticsClient, ICrashReporter, ILogEmitter, LogRecord},
};
use applog_sinks::{
    contain, AnalyticsSink, CrashReportSink, Delivery, DispatchMetrics, SinkAdapter,
    TracingEmitter,
};

use crate::dispatch::Dispatcher;
use crate::logger::Logger;

/// Fan-out logging facade
pub struct LoggingFacade {
    subsystem: String,
    category: String,
    debug_build: bool,
    emitter: Arc<dyn ILogEmitter>,
    sinks: Vec<Arc<dyn SinkAdapter>>,
    context_provider: Arc<dyn DiagnosticContextProvider>,
    dispatcher: Dispatcher,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl LoggingFacade {
    /// Start building a facade from configuration.
    pub fn builder(config: &Config) -> FacadeBuilder {
        FacadeBuilder::new(config)
    }

    /// A facade with the default local emitter and no remote sinks.
    pub fn from_config(config: &Config) -> Self {
        Self::builder(config).build()
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Names of the configured sinks, in construction order.
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn metrics(&self) -> Option<&DispatchMetrics> {
        self.metrics.as_deref()
    }

    /// Log a message.
    ///
    /// The local log receives it at `log` severity; every enabled sink
    /// receives it in full regardless of `visibility`.
    pub fn log(&self, message: &str, visibility: Visibility) {
        self.publish(Event::log(message), visibility);
    }

    /// Report an error.
    ///
    /// The description is derived from the error and its source chain.
    pub fn error(&self, error: &(dyn StdError + 'static), visibility: Visibility) {
        self.publish(Event::from_error(error), visibility);
    }

    /// Report an error that is already reduced to its description.
    pub fn error_description(&self, description: &str, visibility: Visibility) {
        let event = Event::Error {
            description: description.to_string(),
        };
        self.publish(event, visibility);
    }

    /// Local emission first, then one dispatch per sink.
    fn publish(&self, event: Event, visibility: Visibility) {
        let severity = event.severity();
        self.emit_local(severity, event.text(), visibility);
        self.count_event(severity);

        match event {
            Event::Log { message } => {
                let message: Arc<str> = Arc::from(message);
                for sink in &self.sinks {
                    let message = Arc::clone(&message);
                    self.dispatch(sink, "log", move |s| s.record_log(&message));
                }
            }
            Event::Error { description } => {
                let context: Arc<DiagnosticContext> =
                    Arc::new(self.context_provider.diagnostic_context());
                let description: Arc<str> = Arc::from(description);
                for sink in &self.sinks {
                    let context = Arc::clone(&context);
                    let description = Arc::clone(&description);
                    self.dispatch(sink, "error", move |s| {
                        s.record_error(&description, &context)
                    });
                }
            }
        }
    }

    fn emit_local(&self, severity: Severity, message: &str, visibility: Visibility) {
        let record = LogRecord {
            subsystem: self.subsystem.clone(),
            category: self.category.clone(),
            severity,
            message: message.to_string(),
            visibility: visibility.effective(self.debug_build),
        };
        self.emitter.emit(&record);
    }

    fn count_event(&self, severity: Severity) {
        if let Some(metrics) = &self.metrics {
            metrics.record_event(severity);
        }
    }

    fn dispatch<F>(&self, sink: &Arc<dyn SinkAdapter>, op: &'static str, call: F)
    where
        F: FnOnce(&dyn SinkAdapter) -> Delivery + Send + 'static,
    {
        if !sink.is_enabled() {
            if let Some(metrics) = &self.metrics {
                metrics.record_delivery(sink.name(), Delivery::Skipped);
            }
            return;
        }

        let sink = Arc::clone(sink);
        let metrics = self.metrics.clone();
        self.dispatcher.run(move || {
            let delivery = contain(sink.name(), op, || call(sink.as_ref()));
            if let Some(metrics) = metrics {
                metrics.record_delivery(sink.name(), delivery);
            }
        });
    }
}

impl Logger for LoggingFacade {
    fn log(&self, message: &str, visibility: Visibility) {
        LoggingFacade::log(self, message, visibility);
    }

    fn error(&self, error: &(dyn StdError + 'static), visibility: Visibility) {
        LoggingFacade::error(self, error, visibility);
    }
}

// ============================================================================
// FacadeBuilder
// ============================================================================

/// Builder for [`LoggingFacade`].
///
/// Defaults come from the configuration: a [`TracingEmitter`] honouring
/// `logging.redact_private`, a [`BacktraceAttributor`] honouring
/// `attribution.enabled`, and the dispatcher for `dispatch.mode`.
pub struct FacadeBuilder {
    config: Config,
    emitter: Option<Arc<dyn ILogEmitter>>,
    sinks: Vec<Arc<dyn SinkAdapter>>,
    context_provider: Option<Arc<dyn DiagnosticContextProvider>>,
    dispatcher: Option<Dispatcher>,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl FacadeBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            emitter: None,
            sinks: Vec::new(),
            context_provider: None,
            dispatcher: None,
            metrics: None,
        }
    }

    /// Replace the local log emitter.
    pub fn emitter(mut self, emitter: Arc<dyn ILogEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Append a sink adapter.
    pub fn sink(self, sink: impl SinkAdapter + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Append an already shared sink adapter.
    pub fn shared_sink(mut self, sink: Arc<dyn SinkAdapter>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Append a [`CrashReportSink`] configured from `crash_report`.
    pub fn crash_reporter(self, reporter: Arc<dyn ICrashReporter>) -> Self {
        let sink = CrashReportSink::new(&self.config.crash_report, reporter);
        self.sink(sink)
    }

    /// Append an [`AnalyticsSink`] configured from the `analytics` entry
    /// named `name`. Without such an entry the client is not attached.
    pub fn analytics_client(self, name: &str, client: Arc<dyn IAnalyticsClient>) -> Self {
        let sink_config = self
            .config
            .analytics
            .iter()
            .find(|a| a.name == name)
            .cloned();
        match sink_config {
            Some(sink_config) => {
                let bundle_id = self.config.app.bundle_id.as_deref();
                let sink = AnalyticsSink::new(&sink_config, bundle_id, client);
                self.sink(sink)
            }
            None => {
                tracing::warn!(sink = name, "No analytics configuration for sink; not attached");
                self
            }
        }
    }

    /// Replace the diagnostic context provider used for error events.
    pub fn context_provider(mut self, provider: Arc<dyn DiagnosticContextProvider>) -> Self {
        self.context_provider = Some(provider);
        self
    }

    pub fn dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> LoggingFacade {
        let config = self.config;
        let emitter = self
            .emitter
            .unwrap_or_else(|| Arc::new(TracingEmitter::new(config.logging.redact_private)));
        let context_provider = self
            .context_provider
            .unwrap_or_else(|| Arc::new(BacktraceAttributor::new(config.attribution.enabled)));
        let dispatcher = self
            .dispatcher
            .unwrap_or_else(|| Dispatcher::from_mode(config.dispatch.mode));

        let facade = LoggingFacade {
            subsystem: config.subsystem().to_string(),
            category: config.app.category.clone(),
            debug_build: config.app.debug_build,
            emitter,
            sinks: self.sinks,
            context_provider,
            dispatcher,
            metrics: self.metrics,
        };
        tracing::debug!(
            subsystem = %facade.subsystem,
            sinks = ?facade.sink_names(),
            background = facade.dispatcher.is_background(),
            "Logging facade constructed"
        );
        facade
    }
}
