//! Crash-reporting service port
//!
//! ## Implementation Notes
//!
//! - `log` attaches a breadcrumb that is stored with the next issue.
//! - `record` stores a non-fatal issue with free-form metadata.
//! - Uses `anyhow::Result` because failure modes are backend-specific.
//!   Callers treat every error as non-fatal.

use std::collections::HashMap;

/// Port trait for a crash-reporting backend
pub trait ICrashReporter: Send + Sync {
    /// Attach a log line to the current crash-report session
    fn log(&self, message: &str) -> anyhow::Result<()>;

    /// Record a non-fatal error with its metadata
    fn record(&self, description: &str, metadata: &HashMap<String, String>)
        -> anyhow::Result<()>;
}
