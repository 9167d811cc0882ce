//! SinkAdapter contract
//!
//! A sink adapter wraps one external backend. It never raises: backend
//! errors and panics are absorbed at this boundary, logged with
//! `tracing::warn!`, and reported back as [`Delivery::Failed`].

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use applog_core::domain::DiagnosticContext;

/// Outcome of handing one event to one sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// The backend accepted the call
    Delivered,
    /// The sink is disabled; the backend was not called
    Skipped,
    /// The backend failed; the failure was absorbed
    Failed,
}

impl Delivery {
    pub fn as_str(self) -> &'static str {
        match self {
            Delivery::Delivered => "delivered",
            Delivery::Skipped => "skipped",
            Delivery::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform contract over one telemetry backend.
///
/// Enablement is fixed at construction. A disabled adapter returns
/// [`Delivery::Skipped`] without touching its backend.
pub trait SinkAdapter: Send + Sync {
    /// Name used in diagnostics and metric labels
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;

    /// Forward a log message
    fn record_log(&self, message: &str) -> Delivery;

    /// Forward an error description together with its diagnostic context
    fn record_error(&self, description: &str, context: &DiagnosticContext) -> Delivery;
}

/// Run a backend call, absorbing both `Err` results and panics.
pub fn guarded<F>(sink: &str, op: &str, call: F) -> Delivery
where
    F: FnOnce() -> anyhow::Result<()>,
{
    contain(sink, op, || match call() {
        Ok(()) => Delivery::Delivered,
        Err(e) => {
            tracing::warn!(sink, op, error = %e, "Sink backend call failed");
            Delivery::Failed
        }
    })
}

/// Run an adapter call, turning a panic into [`Delivery::Failed`].
pub fn contain<F>(sink: &str, op: &str, call: F) -> Delivery
where
    F: FnOnce() -> Delivery,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(delivery) => delivery,
        Err(payload) => {
            tracing::warn!(
                sink,
                op,
                panic = %panic_message(payload.as_ref()),
                "Sink panicked; event dropped for this sink"
            );
            Delivery::Failed
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
