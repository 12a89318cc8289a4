//! Domain layer for log-sentinel.
//!
//! Contains the canonical types shared across all modules:
//! - `LogEntry`: one successfully parsed line
//! - `LogLevel`: closed severity set (INFO/WARN/ERROR/DEBUG)
//! - `AnalysisSummary` and its parts: the report document
//! - `SentinelError`: Top-level error type

pub mod error;
pub mod instant;
pub mod log_entry;
pub mod log_level;
pub mod summary;

pub use error::SentinelError;
pub use log_entry::LogEntry;
pub use log_level::{LevelCounts, LogLevel, UnknownLevel};
pub use summary::{
    AnalysisMeta, AnalysisSummary, EventCollection, MAX_SAMPLED_EVENTS, SampleEvent, TimeRange,
};
