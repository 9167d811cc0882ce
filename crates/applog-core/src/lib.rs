//! applog Core - Domain types, configuration and ports
//!
//! This crate contains the backend-independent heart of the logging facade:
//! - **Domain types** - `Event`, `Visibility`, `Severity`, `DiagnosticContext`
//! - **Attribution** - `CallSiteAttributor` turning backtrace lines into context
//! - **Port definitions** - Traits for collaborators: `ILogEmitter`, `ICrashReporter`, `IAnalyticsClient`
//! - **Configuration** - YAML-backed `Config` with validation and a builder
//!
//! # Architecture
//!
//! The facade follows the ports & adapters pattern. Ports define the
//! contracts of the external backends (crash reporting, analytics, the
//! local log facility); the `applog-sinks` crate adapts them and
//! `applog-facade` fans events out to them.

pub mod attribution;
pub mod config;
pub mod domain;
pub mod ports;
