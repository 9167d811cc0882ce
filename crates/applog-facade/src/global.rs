//! Process-wide logger accessor
//!
//! Prefer passing an `Arc<dyn Logger>` to consumers directly. This accessor
//! exists for call sites where threading one through is impractical. It is
//! initialised at most once: either explicitly with [`install`] (the path
//! tests use to inject a double) or lazily on first [`logger`] call from
//! the configuration at [`Config::default_path`].

use std::sync::Arc;

use applog_core::config::Config;
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::facade::LoggingFacade;
use crate::logger::Logger;

static GLOBAL: OnceCell<Arc<dyn Logger>> = OnceCell::new();

/// Returned by [`install`] when a global logger already exists.
#[derive(Debug, Error)]
#[error("a global logger is already installed")]
pub struct AlreadyInstalled;

/// Install the process-wide logger. Must happen before the first [`logger`] call.
pub fn install(logger: Arc<dyn Logger>) -> Result<(), AlreadyInstalled> {
    GLOBAL.set(logger).map_err(|_| AlreadyInstalled)
}

/// The process-wide logger, a facade built from the default config file
/// unless one was installed first.
pub fn logger() -> Arc<dyn Logger> {
    let logger = GLOBAL.get_or_init(|| {
        let path = Config::default_path();
        let config = Config::load_or_default(&path);
        let facade: Arc<dyn Logger> = Arc::new(LoggingFacade::from_config(&config));
        facade
    });
    Arc::clone(logger)
}

/// The installed logger, without triggering lazy construction.
pub fn try_logger() -> Option<Arc<dyn Logger>> {
    GLOBAL.get().cloned()
}
