//! Events routed through the facade
//!
//! An event is either a plain log message or the description of an error.
//! Events are immutable and only live for the duration of one dispatch.

use std::error::Error as StdError;

/// Severity of a local log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Log,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Log => "log",
            Severity::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// A single logical event handed to the facade
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A plain log message
    Log { message: String },
    /// An error, reduced to its detailed description
    Error { description: String },
}

impl Event {
    pub fn log(message: impl Into<String>) -> Self {
        Event::Log {
            message: message.into(),
        }
    }

    /// Builds an error event from any error value.
    ///
    /// The description is the error's display text, followed by every
    /// `source()` in its chain, followed by the `Debug` rendering when
    /// that adds information beyond the display text (a Debug that only
    /// quotes the display text adds none).
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        Event::Error {
            description: detailed_description(error),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::Log { .. } => Severity::Log,
            Event::Error { .. } => Severity::Error,
        }
    }

    /// The message or description carried by the event
    pub fn text(&self) -> &str {
        match self {
            Event::Log { message } => message,
            Event::Error { description } => description,
        }
    }
}

fn detailed_description(error: &(dyn StdError + 'static)) -> String {
    let display = error.to_string();
    let mut description = display.clone();

    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(": caused by: ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }

    let debug = format!("{error:?}");
    if debug != display && debug != format!("{display:?}") {
        description.push_str(&format!(" [{debug}]"));
    }

    description
}
