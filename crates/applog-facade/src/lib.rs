//! applog Facade - One call site, many observability backends
//!
//! Provides:
//! - `LoggingFacade`: Emits to the local log and fans out to every sink
//! - `FacadeBuilder`: Explicit, testable construction from `Config`
//! - `Logger`: Object-safe trait consumers depend on
//! - `Dispatcher`: Inline or fire-and-forget background sink dispatch
//! - `global`: Optional lazy-once process-wide accessor
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use applog_core::{config::ConfigBuilder, domain::Visibility};
//! use applog_facade::{Logger, LoggingFacade};
//!
//! let config = ConfigBuilder::new().bundle_id("com.example.app").build();
//! let logger: Arc<dyn Logger> = Arc::new(LoggingFacade::builder(&config).build());
//!
//! logger.log("application started", Visibility::Public);
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "cache unavailable");
//! logger.error_private(&err);
//! ```

pub mod dispatch;
pub mod facade;
pub mod global;
pub mod logger;

pub use dispatch::Dispatcher;
pub use facade::{FacadeBuilder, LoggingFacade};
pub use logger::Logger;
