//! Configuration module for applog.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use crate::domain::errors::{ConfigError, ValidationError};

/// Subsystem used when no bundle identifier is configured.
pub const DEFAULT_FALLBACK_SUBSYSTEM: &str = "AppLogger";

/// Category label used when none is configured.
pub const DEFAULT_CATEGORY: &str = "Application";

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for the logging facade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub attribution: AttributionConfig,
    pub dispatch: DispatchConfig,
    pub crash_report: CrashReportConfig,
    pub analytics: Vec<AnalyticsSinkConfig>,
}

/// Application identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bundle identifier, e.g. `com.example.app`. Names the log subsystem
    /// and the analytics events.
    pub bundle_id: Option<String>,
    /// Subsystem used when `bundle_id` is absent.
    pub fallback_subsystem: String,
    /// Category label for local log records.
    pub category: String,
    /// Forces public visibility in the local log.
    pub debug_build: bool,
}

/// Output format of the local tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Local logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    pub format: LogFormat,
    /// Render private messages as `<private>` in the local log.
    pub redact_private: bool,
}

/// Call-site attribution for error events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    pub enabled: bool,
}

/// How sink calls are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    /// Every sink is called on the caller's thread.
    #[default]
    Inline,
    /// Every sink call is handed to the blocking pool of the tokio runtime.
    Background,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub mode: DispatchMode,
}

/// Crash-reporting sink settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrashReportConfig {
    pub enabled: bool,
    /// Backend application identifier. Empty disables the sink.
    pub app_id: String,
}

/// Separator between the purpose prefix and the bundle identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventNaming {
    /// `log.<id>` / `error.<id>`
    #[default]
    Dotted,
    /// `log_<id>` / `error_<id>`
    Underscored,
}

impl EventNaming {
    /// Build an event name such as `log.com.example.app`.
    pub fn event_name(self, prefix: &str, id: &str) -> String {
        match self {
            EventNaming::Dotted => format!("{prefix}.{id}"),
            EventNaming::Underscored => format!("{prefix}_{id}"),
        }
    }
}

/// One analytics sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSinkConfig {
    /// Unique name, used in diagnostics and metrics labels.
    pub name: String,
    pub enabled: bool,
    /// Backend credential. Empty disables the sink.
    pub api_key: String,
    pub naming: EventNaming,
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load and reject configurations that fail [`Config::validate`].
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/applog/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("applog")
            .join("config.yaml")
    }

    /// Local log subsystem: the bundle identifier, or the fallback.
    pub fn subsystem(&self) -> &str {
        match self.app.bundle_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.app.fallback_subsystem,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bundle_id: None,
            fallback_subsystem: DEFAULT_FALLBACK_SUBSYSTEM.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            debug_build: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            redact_private: true,
        }
    }
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for CrashReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            app_id: String::new(),
        }
    }
}

impl Default for AnalyticsSinkConfig {
    fn default() -> Self {
        Self {
            name: "analytics".to_string(),
            enabled: true,
            api_key: String::new(),
            naming: EventNaming::Dotted,
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid. Missing sink
    /// credentials are not errors: they disable the sink.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- app ---
        if self.app.fallback_subsystem.trim().is_empty() {
            errors.push(ValidationError {
                field: "app.fallback_subsystem".into(),
                message: "must not be empty".into(),
            });
        }
        if self.app.category.trim().is_empty() {
            errors.push(ValidationError {
                field: "app.category".into(),
                message: "must not be empty".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        // --- analytics ---
        let mut seen = HashSet::new();
        for (i, sink) in self.analytics.iter().enumerate() {
            if sink.name.trim().is_empty() {
                errors.push(ValidationError {
                    field: format!("analytics[{i}].name"),
                    message: "must not be empty".into(),
                });
            } else if !seen.insert(sink.name.as_str()) {
                errors.push(ValidationError {
                    field: format!("analytics[{i}].name"),
                    message: format!("duplicate sink name '{}'", sink.name),
                });
            }
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust
/// use applog_core::config::{ConfigBuilder, EventNaming};
///
/// let config = ConfigBuilder::new()
///     .bundle_id("com.example.app")
///     .crash_report(true, "1:1234:ios:abcd")
///     .analytics("primary", true, "key-123", EventNaming::Dotted)
///     .build();
/// assert_eq!(config.subsystem(), "com.example.app");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- app ---

    pub fn bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.config.app.bundle_id = Some(bundle_id.into());
        self
    }

    pub fn fallback_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.config.app.fallback_subsystem = subsystem.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.config.app.category = category.into();
        self
    }

    pub fn debug_build(mut self, debug_build: bool) -> Self {
        self.config.app.debug_build = debug_build;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    pub fn redact_private(mut self, redact: bool) -> Self {
        self.config.logging.redact_private = redact;
        self
    }

    // --- attribution / dispatch ---

    pub fn attribution_enabled(mut self, enabled: bool) -> Self {
        self.config.attribution.enabled = enabled;
        self
    }

    pub fn dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.config.dispatch.mode = mode;
        self
    }

    // --- sinks ---

    pub fn crash_report(mut self, enabled: bool, app_id: impl Into<String>) -> Self {
        self.config.crash_report = CrashReportConfig {
            enabled,
            app_id: app_id.into(),
        };
        self
    }

    /// Append an analytics sink.
    pub fn analytics(
        mut self,
        name: impl Into<String>,
        enabled: bool,
        api_key: impl Into<String>,
        naming: EventNaming,
    ) -> Self {
        self.config.analytics.push(AnalyticsSinkConfig {
            name: name.into(),
            enabled,
            api_key: api_key.into(),
            naming,
        });
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
