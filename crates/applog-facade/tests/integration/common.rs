//! Shared recording doubles for facade integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};

use applog_core::{
    attribution::DiagnosticContextProvider,
    domain::DiagnosticContext,
    ports::{IAnalyticsClient, ICrashReporter, ILogEmitter, LogRecord},
};

/// How a double reacts to a call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Behavior {
    #[default]
    Succeed,
    Fail,
    Panic,
}

impl Behavior {
    fn apply(self) -> anyhow::Result<()> {
        match self {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => anyhow::bail!("backend unavailable"),
            Behavior::Panic => panic!("backend crashed"),
        }
    }
}

#[derive(Default)]
pub struct RecordingEmitter {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingEmitter {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ILogEmitter for RecordingEmitter {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

#[derive(Default)]
pub struct RecordingCrashReporter {
    pub behavior: Behavior,
    pub logs: Mutex<Vec<String>>,
    pub records: Mutex<Vec<(String, HashMap<String, String>)>>,
}

impl RecordingCrashReporter {
    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Default::default()
        }
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<(String, HashMap<String, String>)> {
        self.records.lock().unwrap().clone()
    }
}

impl ICrashReporter for RecordingCrashReporter {
    fn log(&self, message: &str) -> anyhow::Result<()> {
        self.logs.lock().unwrap().push(message.to_string());
        self.behavior.apply()
    }

    fn record(
        &self,
        description: &str,
        metadata: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        self.records
            .lock()
            .unwrap()
            .push((description.to_string(), metadata.clone()));
        self.behavior.apply()
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    pub behavior: Behavior,
    pub tracked: Mutex<Vec<(String, HashMap<String, String>)>>,
}

impl RecordingAnalytics {
    pub fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            ..Default::default()
        }
    }

    pub fn tracked(&self) -> Vec<(String, HashMap<String, String>)> {
        self.tracked.lock().unwrap().clone()
    }
}

impl IAnalyticsClient for RecordingAnalytics {
    fn track(
        &self,
        event_name: &str,
        properties: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        self.tracked
            .lock()
            .unwrap()
            .push((event_name.to_string(), properties.clone()));
        self.behavior.apply()
    }
}

/// Analytics client forwarding every event name over a channel
pub struct ChannelAnalytics(pub Mutex<mpsc::Sender<String>>);

impl IAnalyticsClient for ChannelAnalytics {
    fn track(
        &self,
        event_name: &str,
        _properties: &HashMap<String, String>,
    ) -> anyhow::Result<()> {
        self.0.lock().unwrap().send(event_name.to_string())?;
        Ok(())
    }
}

/// Context provider returning a fixed context and counting its calls
pub struct CountingProvider {
    pub calls: AtomicUsize,
    pub context: DiagnosticContext,
}

impl CountingProvider {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let mut context = DiagnosticContext::new();
        for (k, v) in entries {
            context.insert(*k, *v);
        }
        Self {
            calls: AtomicUsize::new(0),
            context,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DiagnosticContextProvider for CountingProvider {
    fn diagnostic_context(&self) -> DiagnosticContext {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.context.clone()
    }
}

/// A two-level error chain
#[derive(Debug)]
pub struct SaveError(pub std::io::Error);

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to save document")
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
