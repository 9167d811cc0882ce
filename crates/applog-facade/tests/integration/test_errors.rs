//! Error fan-out: one context computation shared by every sink

use std::sync::Arc;

use applog_core::{
    config::{ConfigBuilder, EventNaming},
    domain::{Severity, Visibility},
};
use applog_facade::{Logger, LoggingFacade};

use crate::common::{
    CountingProvider, RecordingAnalytics, RecordingCrashReporter, RecordingEmitter, SaveError,
};

fn io_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume")
}

#[test]
fn test_context_computed_once_regardless_of_sink_count() {
    let config = ConfigBuilder::new()
        .crash_report(true, "app")
        .analytics("a", true, "k1", EventNaming::Dotted)
        .analytics("b", true, "k2", EventNaming::Dotted)
        .analytics("c", true, "k3", EventNaming::Underscored)
        .build();
    let provider = Arc::new(CountingProvider::new(&[("0 app::save", "at src/save.rs:3:9")]));

    let facade = LoggingFacade::builder(&config)
        .emitter(Arc::new(RecordingEmitter::default()))
        .crash_reporter(Arc::new(RecordingCrashReporter::default()))
        .analytics_client("a", Arc::new(RecordingAnalytics::default()))
        .analytics_client("b", Arc::new(RecordingAnalytics::default()))
        .analytics_client("c", Arc::new(RecordingAnalytics::default()))
        .context_provider(provider.clone())
        .build();

    facade.error(&io_error(), Visibility::Private);
    assert_eq!(provider.calls(), 1);

    facade.error(&io_error(), Visibility::Public);
    assert_eq!(provider.calls(), 2);
}

#[test]
fn test_log_never_computes_context() {
    let provider = Arc::new(CountingProvider::new(&[]));
    let facade = LoggingFacade::builder(&ConfigBuilder::new().build())
        .emitter(Arc::new(RecordingEmitter::default()))
        .context_provider(provider.clone())
        .build();

    facade.log("plain", Visibility::Public);

    assert_eq!(provider.calls(), 0);
}

#[test]
fn test_two_sinks_receive_identical_description_and_context() {
    let config = ConfigBuilder::new()
        .bundle_id("com.example.app")
        .crash_report(true, "app")
        .analytics("primary", true, "k", EventNaming::Dotted)
        .build();
    let emitter = Arc::new(RecordingEmitter::default());
    let crash = Arc::new(RecordingCrashReporter::default());
    let analytics = Arc::new(RecordingAnalytics::default());
    let provider = Arc::new(CountingProvider::new(&[
        ("0 app::save", "at src/save.rs:3:9"),
        ("1 app::main", "at src/main.rs:12:5"),
    ]));

    let facade = LoggingFacade::builder(&config)
        .emitter(emitter.clone())
        .crash_reporter(crash.clone())
        .analytics_client("primary", analytics.clone())
        .context_provider(provider)
        .build();

    let err = SaveError(io_error());
    facade.error(&err, Visibility::Public);

    let records = emitter.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);

    let crash_records = crash.records();
    assert_eq!(crash_records.len(), 1);
    let (crash_description, crash_metadata) = &crash_records[0];
    assert!(crash_description.starts_with("failed to save document: caused by: read-only volume"));
    assert_eq!(&records[0].message, crash_description);

    let tracked = analytics.tracked();
    assert_eq!(tracked.len(), 1);
    let (event_name, properties) = &tracked[0];
    assert_eq!(event_name, "error.com.example.app");
    assert_eq!(&properties["description"], crash_description);

    let mut analytics_context = properties.clone();
    analytics_context.remove("description");
    assert_eq!(&analytics_context, crash_metadata);
    assert_eq!(crash_metadata.len(), 2);
}

#[test]
fn test_error_with_disabled_attribution_sends_empty_context() {
    let config = ConfigBuilder::new()
        .crash_report(true, "app")
        .attribution_enabled(false)
        .build();
    let crash = Arc::new(RecordingCrashReporter::default());

    let facade = LoggingFacade::builder(&config)
        .emitter(Arc::new(RecordingEmitter::default()))
        .crash_reporter(crash.clone())
        .build();

    facade.error(&io_error(), Visibility::Private);

    let records = crash.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].1.is_empty());
}

#[test]
fn test_error_through_logger_trait_object() {
    let config = ConfigBuilder::new().crash_report(true, "app").build();
    let emitter = Arc::new(RecordingEmitter::default());
    let crash = Arc::new(RecordingCrashReporter::default());
    let logger: Arc<dyn Logger> = Arc::new(
        LoggingFacade::builder(&config)
            .emitter(emitter.clone())
            .crash_reporter(crash.clone())
            .context_provider(Arc::new(CountingProvider::new(&[])))
            .build(),
    );

    let err = anyhow::anyhow!("sync aborted").context("background refresh failed");
    logger.error_private(&*err);

    assert_eq!(emitter.records()[0].visibility, Visibility::Private);
    let description = &crash.records()[0].0;
    assert!(description.starts_with("background refresh failed: caused by: sync aborted"));
}
