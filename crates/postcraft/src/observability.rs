//! Tracing subscriber setup for the binary.

use postcraft_error::{ConfigError, PostcraftResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "postcraft_workflow=debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
    /// Let `RUST_LOG` replace `log_level`
    pub use_env: bool,
}

impl ObservabilityConfig {
    /// Create a configuration with the given filter and text output.
    pub fn new(log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            json_logs: false,
            use_env: true,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Use `level` regardless of `RUST_LOG`.
    pub fn with_forced_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self.use_env = false;
        self
    }

    fn env_filter(&self) -> PostcraftResult<EnvFilter> {
        let configured = || EnvFilter::try_new(&self.log_level);
        let filter = if self.use_env {
            EnvFilter::try_from_default_env().or_else(|_| configured())
        } else {
            configured()
        };
        filter.map_err(|e| {
            ConfigError::new(format!("Invalid log filter '{}': {}", self.log_level, e)).into()
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new("info")
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level unless the level is forced.
/// Logs go to stderr so that command output on stdout stays clean.
///
/// # Errors
///
/// Returns a configuration error if the filter is invalid or a subscriber is
/// already installed.
pub fn init_observability(config: &ObservabilityConfig) -> PostcraftResult<()> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}
