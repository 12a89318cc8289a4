use crate::app::config::ConfigError;
use crate::app::logging_system::LoggingError;
use crate::report::SinkError;
use crate::source::SourceError;
use thiserror::Error;

/// Top-level error type for one analysis run.
///
/// Parse failures never appear here: they are counted by the analyzer and
/// never abort a run.
#[derive(Error, Debug)]
pub enum SentinelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl SentinelError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SentinelError::Config(_) => 2,
            SentinelError::Logging(_) | SentinelError::Source(_) | SentinelError::Sink(_) => 1,
        }
    }
}
