//! Console collaborators
//!
//! Stand-ins for the crash-reporting and analytics backends that write
//! one JSON line per call to stdout.

use std::collections::HashMap;
use std::io::Write;

use applog_core::ports::{IAnalyticsClient, ICrashReporter};
use serde_json::{json, Value};

fn write_line(value: &Value) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{value}")?;
    Ok(())
}

/// Crash reporter printing breadcrumbs and non-fatal issues
pub struct ConsoleCrashReporter;

impl ICrashReporter for ConsoleCrashReporter {
    fn log(&self, message: &str) -> anyhow::Result<()> {
        write_line(&crash_log_line(message))
    }

    fn record(
        &self,
        description: &str,
        metadata: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        write_line(&crash_record_line(description, metadata))
    }
}

/// Analytics client printing tracked events
pub struct ConsoleAnalytics {
    sink: String,
}

impl ConsoleAnalytics {
    pub fn new(sink: impl Into<String>) -> Self {
        Self { sink: sink.into() }
    }
}

impl IAnalyticsClient for ConsoleAnalytics {
    fn track(
        &self,
        event_name: &str,
        properties: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        write_line(&track_line(&self.sink, event_name, properties))
    }
}

fn crash_log_line(message: &str) -> Value {
    json!({"sink": "crash_report", "op": "log", "message": message})
}

fn crash_record_line(description: &str, metadata: &HashMap<String, String>) -> Value {
    json!({
        "sink": "crash_report",
        "op": "record",
        "description": description,
        "metadata": metadata,
    })
}

fn track_line(sink: &str, event_name: &str, properties: &HashMap<String, String>) -> Value {
    json!({
        "sink": sink,
        "op": "track",
        "event": event_name,
        "properties": properties,
    })
}
