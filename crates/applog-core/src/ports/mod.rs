//! Port definitions (collaborator interfaces)
//!
//! The facade never talks to a concrete backend directly. Each backend is
//! reached through one of these traits, implemented outside the core.
//!
//! ## Ports Overview
//!
//! - [`ILogEmitter`] - The local structured-log facility
//! - [`ICrashReporter`] - A crash-reporting service (breadcrumbs and non-fatal issues)
//! - [`IAnalyticsClient`] - An analytics/telemetry service accepting named events

pub mod analytics;
pub mod crash_reporter;
pub mod log_emitter;

pub use analytics::IAnalyticsClient;
pub use crash_reporter::ICrashReporter;
pub use log_emitter::{ILogEmitter, LogRecord};
