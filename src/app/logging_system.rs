use super::config::{LogFormat, TracingLevel};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global tracing subscriber: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Builds and installs the process-wide tracing subscriber.
///
/// Diagnostics go to stderr so stdout stays free for the run summary.
/// `RUST_LOG`, when set, replaces the computed filter entirely.
pub struct LoggingSystem {
    default_level: TracingLevel,
    format: LogFormat,
    directives: Vec<(String, TracingLevel)>,
}

impl LoggingSystem {
    pub fn new(level: TracingLevel, format: LogFormat) -> Self {
        Self {
            default_level: TracingLevel::Warn,
            format,
            directives: vec![(env!("CARGO_CRATE_NAME").to_string(), level)],
        }
    }

    pub fn with_directive(mut self, target: impl Into<String>, level: TracingLevel) -> Self {
        self.directives.push((target.into(), level));
        self
    }

    pub fn build_filter_string(&self) -> String {
        let mut filter_parts = Vec::with_capacity(self.directives.len() + 1);
        filter_parts.push(self.default_level.as_str().to_string());

        for (target, level) in &self.directives {
            filter_parts.push(format!("{target}={}", level.as_str()));
        }

        filter_parts.join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.build_filter_string(),
        };

        EnvFilter::try_new(&filter).map_err(|source| LoggingError::InvalidFilter { filter, source })
    }

    pub fn init(self) -> Result<(), LoggingError> {
        let env_filter = self.env_filter()?;

        match self.format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?,
            LogFormat::Text => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init()?,
        }

        Ok(())
    }
}

pub fn setup_logging(level: TracingLevel, format: LogFormat) -> Result<(), LoggingError> {
    LoggingSystem::new(level, format).init()
}
