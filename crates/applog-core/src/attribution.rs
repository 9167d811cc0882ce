//! Call-site attribution
//!
//! Turns the textual frames of a backtrace into a [`DiagnosticContext`]
//! keyed by `"<frame index> <symbol>"`. Parsing is purely textual: lines
//! that do not look like a frame are skipped, never reported.

use std::backtrace::{Backtrace, BacktraceStatus};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DiagnosticContext;

/// Separates a normalized symbol from its location. Demangled symbols
/// may contain spaces (`<F as FnOnce>::call_once`) but never this.
const SYMBOL_SEPARATOR: &str = " | ";

/// Either `<index>[:] <symbol> | <location>` as produced by
/// [`normalize_frames`], or `<index>[:] <symbol> <remaining text>` with a
/// whitespace-free symbol. Leading whitespace is allowed.
static FRAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+):?\s+(?:(\S.*?)\s+\|\s+(.*\S)|(\S+)\s+(.*\S))\s*$")
        .expect("frame pattern is a valid regex")
});

/// Location used when the native backtrace reports none.
const UNKNOWN_LOCATION: &str = "at <unknown>";

/// Parses raw backtrace lines into a diagnostic context.
pub struct CallSiteAttributor;

impl CallSiteAttributor {
    /// Attribute each well-formed frame line to its location text.
    ///
    /// Later frames with the same index and symbol overwrite earlier ones.
    pub fn attribute<S: AsRef<str>>(frames: &[S]) -> DiagnosticContext {
        frames
            .iter()
            .filter_map(|line| {
                let caps = FRAME_PATTERN.captures(line.as_ref())?;
                let (symbol, location) = match (caps.get(2), caps.get(3)) {
                    (Some(symbol), Some(location)) => (symbol, location),
                    _ => (caps.get(4)?, caps.get(5)?),
                };
                let key = format!("{} {}", &caps[1], symbol.as_str());
                Some((key, location.as_str().to_string()))
            })
            .collect()
    }
}

/// Capture the current thread's call stack as one line per frame.
///
/// Returns `None` when backtraces are not supported on this platform.
pub fn capture_frames() -> Option<Vec<String>> {
    let backtrace = Backtrace::force_capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Some(normalize_frames(&backtrace.to_string())),
        _ => None,
    }
}

/// Fold the native multi-line rendering into `N symbol | at location` lines.
///
/// The standard library prints a frame as `  N: symbol` optionally
/// followed by an indented `at file:line:col` line.
fn normalize_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    let mut pending: Option<String> = None;

    for line in rendered.lines() {
        let trimmed = line.trim();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = pending.take() {
                frames.push(format!("{frame}{SYMBOL_SEPARATOR}at {location}"));
            }
            continue;
        }

        let Some((index, symbol)) = trimmed.split_once(':') else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        if let Some(frame) = pending.take() {
            frames.push(format!("{frame}{SYMBOL_SEPARATOR}{UNKNOWN_LOCATION}"));
        }
        pending = Some(format!("{index} {}", symbol.trim()));
    }

    if let Some(frame) = pending {
        frames.push(format!("{frame}{SYMBOL_SEPARATOR}{UNKNOWN_LOCATION}"));
    }

    frames
}

/// Source of the diagnostic context attached to error events.
///
/// The facade calls this exactly once per error event and shares the
/// result with every sink.
pub trait DiagnosticContextProvider: Send + Sync {
    fn diagnostic_context(&self) -> DiagnosticContext;
}

/// Context provider backed by the live call stack.
#[derive(Debug, Clone, Copy)]
pub struct BacktraceAttributor {
    enabled: bool,
}

impl BacktraceAttributor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for BacktraceAttributor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DiagnosticContextProvider for BacktraceAttributor {
    fn diagnostic_context(&self) -> DiagnosticContext {
        if !self.enabled {
            return DiagnosticContext::new();
        }
        match capture_frames() {
            Some(frames) => CallSiteAttributor::attribute(&frames),
            None => DiagnosticContext::new(),
        }
    }
}
