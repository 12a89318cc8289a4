use super::log_level::LogLevel;
use chrono::{DateTime, Utc};

/// One successfully parsed log line.
///
/// Created by the parser and folded into the analyzer straight away. Fields
/// are private so an entry cannot be altered after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    level: LogLevel,
    message: String,
    raw: String,
}

impl LogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        level: LogLevel,
        message: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            raw: raw.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input line exactly as read, including surrounding whitespace.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
