//! Analytics/telemetry service port

use std::collections::HashMap;

/// Port trait for an analytics backend accepting named events
///
/// Implementations may queue or upload asynchronously; `track` only has
/// to hand the event over.
pub trait IAnalyticsClient: Send + Sync {
    /// Track an event with string properties
    fn track(&self, event_name: &str, properties: &HashMap<String, String>)
        -> anyhow::Result<()>;
}
