//! Logger trait
//!
//! The capability consumers receive (`Arc<dyn Logger>`). Both operations
//! are infallible: a logging call is never the cause of a new failure.

use std::error::Error as StdError;

use applog_core::domain::Visibility;

pub trait Logger: Send + Sync {
    /// Log a message with the given local-log visibility.
    fn log(&self, message: &str, visibility: Visibility);

    /// Report an error with the given local-log visibility.
    fn error(&self, error: &(dyn StdError + 'static), visibility: Visibility);

    /// [`Logger::log`] with the default (private) visibility.
    fn log_private(&self, message: &str) {
        self.log(message, Visibility::default());
    }

    /// [`Logger::error`] with the default (private) visibility.
    fn error_private(&self, error: &(dyn StdError + 'static)) {
        self.error(error, Visibility::default());
    }
}
