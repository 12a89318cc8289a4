//! The report document produced at the end of a run.
//!
//! Field names and nesting are the compatibility surface of the JSON report,
//! so every type here serializes in camelCase and instants go through
//! [`super::instant`].

use super::log_level::LevelCounts;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capacity of each ERROR / WARN sample buffer.
pub const MAX_SAMPLED_EVENTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMeta {
    #[serde(with = "super::instant")]
    pub analyzed_at: DateTime<Utc>,
    pub input_file: String,
    pub total_lines: u64,
    pub parsed_lines: u64,
    pub parse_errors: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "super::instant")]
    pub start: DateTime<Utc>,
    #[serde(with = "super::instant")]
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    /// Widen the range to include `instant`. Each bound moves independently
    /// and never narrows.
    pub fn widen(&mut self, instant: DateTime<Utc>) {
        if instant < self.start {
            self.start = instant;
        }
        if instant > self.end {
            self.end = instant;
        }
    }
}

/// Reduced view of an ERROR or WARN entry. The level is implied by the
/// collection holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEvent {
    #[serde(with = "super::instant")]
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollection {
    pub items: Vec<SampleEvent>,
    pub total_count: u64,
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub meta: AnalysisMeta,
    pub time_range: Option<TimeRange>,
    pub summary: LevelCounts,
    pub errors: EventCollection,
    pub warnings: EventCollection,
}
