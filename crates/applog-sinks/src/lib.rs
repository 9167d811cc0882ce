//! applog Sinks - Adapters between the facade and its backends
//!
//! Provides:
//! - `SinkAdapter`: Uniform, non-failing contract over one backend
//! - `CrashReportSink`: Adapter over an `ICrashReporter`
//! - `AnalyticsSink`: Adapter over an `IAnalyticsClient`
//! - `TracingEmitter`: The local log, emitted through `tracing`
//! - `DispatchMetrics`: Prometheus counters for events and deliveries

pub mod analytics;
pub mod crash_report;
pub mod emitter;
pub mod metrics;
pub mod sink;

pub use analytics::AnalyticsSink;
pub use crash_report::CrashReportSink;
pub use emitter::TracingEmitter;
pub use metrics::DispatchMetrics;
pub use sink::{contain, guarded, Delivery, SinkAdapter};
