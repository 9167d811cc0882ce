//! Prometheus metrics for event dispatch
//!
//! Counts events handed to the facade and the outcome of every sink
//! delivery, so silent sink failures remain observable.

use applog_core::domain::Severity;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::sink::Delivery;

/// Registry holding the dispatch counters.
pub struct DispatchMetrics {
    registry: Registry,
    /// Counter: events accepted by the facade, by kind (log, error)
    pub events_total: IntCounterVec,
    /// Counter: sink deliveries by (sink, outcome)
    pub sink_deliveries_total: IntCounterVec,
}

impl DispatchMetrics {
    /// Creates a new `DispatchMetrics` with all metrics registered.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new_custom(Some("applog".to_string()), None)?;

        let events_total = IntCounterVec::new(
            Opts::new("events_total", "Events accepted by the facade"),
            &["kind"],
        )?;
        registry.register(Box::new(events_total.clone()))?;

        let sink_deliveries_total = IntCounterVec::new(
            Opts::new("sink_deliveries_total", "Sink deliveries by outcome"),
            &["sink", "outcome"],
        )?;
        registry.register(Box::new(sink_deliveries_total.clone()))?;

        Ok(Self {
            registry,
            events_total,
            sink_deliveries_total,
        })
    }

    // ========================================================================
    // Recording helpers
    // ========================================================================

    pub fn record_event(&self, severity: Severity) {
        let kind = severity.to_string();
        self.events_total.with_label_values(&[kind.as_str()]).inc();
    }

    pub fn record_delivery(&self, sink: &str, delivery: Delivery) {
        self.sink_deliveries_total
            .with_label_values(&[sink, delivery.as_str()])
            .inc();
    }

    /// Current count for one (sink, outcome) pair.
    pub fn deliveries(&self, sink: &str, delivery: Delivery) -> u64 {
        self.sink_deliveries_total
            .with_label_values(&[sink, delivery.as_str()])
            .get()
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Encode all metrics in Prometheus text exposition format.
    pub fn encode(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
