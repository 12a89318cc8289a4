use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a parsed log line.
///
/// The set is closed: a token outside these four is a parse failure, never a
/// new variant. This is distinct from `app::config::TracingLevel`, which
/// controls the tool's own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level token: {0}")]
pub struct UnknownLevel(pub String);

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    /// Exact, case-sensitive match against the canonical tokens.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "DEBUG" => Ok(LogLevel::Debug),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-level line counts. One field per level so every level is always
/// present in the report, zero when unseen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    #[serde(rename = "INFO")]
    pub info: u64,
    #[serde(rename = "WARN")]
    pub warn: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
    #[serde(rename = "DEBUG")]
    pub debug: u64,
}

impl LevelCounts {
    pub fn increment(&mut self, level: LogLevel) {
        *self.slot_mut(level) += 1;
    }

    pub fn get(&self, level: LogLevel) -> u64 {
        match level {
            LogLevel::Info => self.info,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
            LogLevel::Debug => self.debug,
        }
    }

    pub fn total(&self) -> u64 {
        self.info + self.warn + self.error + self.debug
    }

    fn slot_mut(&mut self, level: LogLevel) -> &mut u64 {
        match level {
            LogLevel::Info => &mut self.info,
            LogLevel::Warn => &mut self.warn,
            LogLevel::Error => &mut self.error,
            LogLevel::Debug => &mut self.debug,
        }
    }
}
