//! Background dispatch hands sink calls off the caller's thread

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use applog_core::{
    config::{ConfigBuilder, DispatchMode, EventNaming},
    domain::Visibility,
    ports::IAnalyticsClient,
};
use applog_facade::{Dispatcher, LoggingFacade};
use applog_sinks::{Delivery, DispatchMetrics};

use crate::common::{ChannelAnalytics, RecordingCrashReporter, RecordingEmitter};

struct SlowAnalytics;

impl IAnalyticsClient for SlowAnalytics {
    fn track(
        &self,
        _event_name: &str,
        _properties: &std::collections::HashMap<String, String>,
    ) -> anyhow::Result<()> {
        std::thread::sleep(Duration::from_secs(2));
        Ok(())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_sink_does_not_delay_caller_or_other_sinks() {
    let config = ConfigBuilder::new()
        .bundle_id("com.example.app")
        .analytics("slow", true, "k1", EventNaming::Dotted)
        .analytics("fast", true, "k2", EventNaming::Dotted)
        .dispatch_mode(DispatchMode::Background)
        .build();
    let (tx, rx) = mpsc::channel();

    let emitter = Arc::new(RecordingEmitter::default());
    let facade = LoggingFacade::builder(&config)
        .emitter(emitter.clone())
        .analytics_client("slow", Arc::new(SlowAnalytics))
        .analytics_client("fast", Arc::new(ChannelAnalytics(Mutex::new(tx))))
        .build();

    let started = std::time::Instant::now();
    facade.log("hello", Visibility::Public);
    assert!(started.elapsed() < Duration::from_secs(1));

    // Local emission happens before dispatch, on the caller's thread.
    assert_eq!(emitter.records().len(), 1);

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(1)))
        .await
        .unwrap()
        .expect("fast sink receives the event");
    assert_eq!(event, "log.com.example.app");
}

#[test]
fn test_explicit_inline_dispatcher_overrides_config() {
    let config = ConfigBuilder::new()
        .analytics("fast", true, "k", EventNaming::Underscored)
        .dispatch_mode(DispatchMode::Background)
        .build();
    let (tx, rx) = mpsc::channel();

    let facade = LoggingFacade::builder(&config)
        .emitter(Arc::new(RecordingEmitter::default()))
        .analytics_client("fast", Arc::new(ChannelAnalytics(Mutex::new(tx))))
        .dispatcher(Dispatcher::Inline)
        .build();

    facade.error_description("boom", Visibility::Private);

    assert_eq!(rx.try_recv().unwrap(), "error_AppLogger");
}

#[test]
fn test_background_facade_outliving_its_runtime_still_delivers() {
    let config = ConfigBuilder::new().crash_report(true, "app").build();
    let crash = Arc::new(RecordingCrashReporter::default());
    let metrics = Arc::new(DispatchMetrics::new().unwrap());

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let facade = LoggingFacade::builder(&config)
        .emitter(Arc::new(RecordingEmitter::default()))
        .crash_reporter(crash.clone())
        .dispatcher(Dispatcher::Background(runtime.handle().clone()))
        .metrics(metrics.clone())
        .build();
    drop(runtime);

    facade.log("after shutdown", Visibility::Public);

    assert_eq!(crash.logs(), vec!["after shutdown".to_string()]);
    assert_eq!(metrics.deliveries("crash_report", Delivery::Delivered), 1);
}
