//! Terminal output for CLI commands
//!
//! Human output is line oriented with status glyphs. JSON output prints
//! one object per call; errors go to stderr in both modes.

use serde_json::{json, Value};

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub trait OutputFormatter {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
    fn print_json(&self, value: &Value);

    /// Summary of one event handed to the facade.
    fn dispatched(&self, kind: &str, subsystem: &str, sinks: &[&str]);

    /// Prometheus text exposition of the dispatch counters.
    fn metrics(&self, text: &str);
}

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("\u{2717} Error: {message}");
    }

    fn info(&self, message: &str) {
        println!("  {message}");
    }

    fn print_json(&self, _value: &Value) {}

    fn dispatched(&self, kind: &str, subsystem: &str, sinks: &[&str]) {
        self.success(&format!("{kind} dispatched ({subsystem})"));
        self.info(&sink_list(sinks));
    }

    fn metrics(&self, text: &str) {
        println!();
        for line in text.lines() {
            self.info(line);
        }
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, message: &str) {
        println!("{}", json!({"success": true, "message": message}));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", json!({"success": false, "error": message}));
    }

    fn info(&self, _message: &str) {}

    fn print_json(&self, value: &Value) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => self.error(&e.to_string()),
        }
    }

    fn dispatched(&self, kind: &str, subsystem: &str, sinks: &[&str]) {
        println!("{}", dispatched_value(kind, subsystem, sinks));
    }

    fn metrics(&self, text: &str) {
        println!("{}", json!({"metrics": text}));
    }
}

fn sink_list(sinks: &[&str]) -> String {
    if sinks.is_empty() {
        "sinks: (none)".to_string()
    } else {
        format!("sinks: {}", sinks.join(", "))
    }
}

fn dispatched_value(kind: &str, subsystem: &str, sinks: &[&str]) -> Value {
    json!({
        "success": true,
        "event": kind,
        "subsystem": subsystem,
        "sinks": sinks,
    })
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Human => Box::new(HumanFormatter),
    }
}
