//! Local structured-log port
//!
//! ## Design Notes
//!
//! - Emission is infallible from the caller's point of view; an emitter
//!   that can fail must absorb the failure itself.
//! - `visibility` is an annotation for the emitter. How (or whether) a
//!   private message is elided is the emitter's decision.

use crate::domain::{Severity, Visibility};

/// One record for the local log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Subsystem, derived from the bundle identifier
    pub subsystem: String,
    /// Category label, e.g. `"Application"`
    pub category: String,
    pub severity: Severity,
    pub message: String,
    pub visibility: Visibility,
}

/// Port trait for the local structured-log facility
pub trait ILogEmitter: Send + Sync {
    fn emit(&self, record: &LogRecord);
}
