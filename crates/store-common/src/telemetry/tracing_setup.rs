//! Tracing and logging setup
//!
//! `RUST_LOG` wins when set; otherwise the environment preset decides.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Per-statement sqlx logs are noise at the default level
const QUIET_TARGETS: &str = "sqlx=warn";

/// Tracing configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Level used when `RUST_LOG` is unset
    pub level: Level,
    /// JSON lines instead of human-readable output
    pub json: bool,
    /// Log span open and close, with timings
    pub span_events: bool,
}

impl TracingConfig {
    /// Preset for a deployment environment
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
            },
            Environment::Staging => Self {
                level: Level::INFO,
                json: false,
                span_events: false,
            },
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                span_events: false,
            },
        }
    }

    fn default_filter(&self) -> String {
        format!("{},{QUIET_TARGETS}", self.level)
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_span_events(span_events.clone()));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_span_events(span_events)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
