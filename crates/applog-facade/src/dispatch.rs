//! Scheduling of sink calls
//!
//! `Inline` calls each sink on the caller's thread, in construction order.
//! `Background` hands each sink call to the tokio blocking pool and
//! returns immediately, so a slow backend delays neither the caller nor
//! the other sinks. Ordering between sinks is not guaranteed there.
//! A job the runtime drops without running (the runtime has shut down)
//! runs inline instead, so no event is lost with the runtime.

use applog_core::config::DispatchMode;
use tokio::runtime::Handle;

#[derive(Debug, Clone, Default)]
pub enum Dispatcher {
    #[default]
    Inline,
    Background(Handle),
}

impl Dispatcher {
    /// Background dispatch on the runtime of the calling context, if any.
    pub fn background() -> Option<Self> {
        Handle::try_current().ok().map(Dispatcher::Background)
    }

    /// Resolve a configured mode. Background without a running tokio
    /// runtime degrades to inline dispatch.
    pub fn from_mode(mode: DispatchMode) -> Self {
        match mode {
            DispatchMode::Inline => Dispatcher::Inline,
            DispatchMode::Background => Self::background().unwrap_or_else(|| {
                tracing::warn!("Background dispatch requested outside a tokio runtime; using inline");
                Dispatcher::Inline
            }),
        }
    }

    pub fn is_background(&self) -> bool {
        matches!(self, Dispatcher::Background(_))
    }

    pub(crate) fn run<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        match self {
            Dispatcher::Inline => job(),
            Dispatcher::Background(handle) => {
                let mut pending = PendingJob(Some(job));
                // Detached; the join handle is never awaited.
                drop(handle.spawn_blocking(move || pending.run()));
            }
        }
    }
}

/// Runs its job exactly once: when the blocking pool gets to it, or on
/// drop if the pool discarded it unrun.
struct PendingJob<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> PendingJob<F> {
    fn run(&mut self) {
        if let Some(job) = self.0.take() {
            job();
        }
    }
}

impl<F: FnOnce()> Drop for PendingJob<F> {
    fn drop(&mut self) {
        if self.0.is_some() {
            tracing::warn!("Background runtime unavailable; dispatching inline");
            self.run();
        }
    }
}
