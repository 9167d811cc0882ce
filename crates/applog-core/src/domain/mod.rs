//! Domain types shared by every layer of the facade
//!
//! - Visibility and severity of local log records
//! - Events (log messages and error descriptions)
//! - Diagnostic context attached to error events
//! - Error types

pub mod context;
pub mod errors;
pub mod event;
pub mod visibility;

pub use context::DiagnosticContext;
pub use errors::{ConfigError, ValidationError};
pub use event::{Event, Severity};
pub use visibility::Visibility;
