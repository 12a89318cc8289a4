//! Streaming aggregation over parsed lines.
//!
//! One [`Analyzer`] per input. It owns every counter and sample buffer for the
//! run; memory stays constant no matter how many lines are folded in.

pub mod sample;

pub use sample::SampleBuffer;

use crate::domain::{
    AnalysisMeta, AnalysisSummary, LevelCounts, LogEntry, LogLevel, MAX_SAMPLED_EVENTS,
    SampleEvent, TimeRange,
};
use crate::parser::{ParseFailure, ParseOutcome};
use chrono::{SubsecRound, Utc};

#[derive(Debug)]
pub struct Analyzer {
    input_file: String,
    total_lines: u64,
    parsed_lines: u64,
    parse_errors: u64,
    level_counts: LevelCounts,
    time_range: Option<TimeRange>,
    errors: SampleBuffer,
    warnings: SampleBuffer,
}

impl Analyzer {
    pub fn new(input_file: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            total_lines: 0,
            parsed_lines: 0,
            parse_errors: 0,
            level_counts: LevelCounts::default(),
            time_range: None,
            errors: SampleBuffer::new(MAX_SAMPLED_EVENTS),
            warnings: SampleBuffer::new(MAX_SAMPLED_EVENTS),
        }
    }

    /// Count one input line. Call once per line, before folding its outcome.
    pub fn observe_line(&mut self) {
        self.total_lines += 1;
    }

    pub fn record_failure(&mut self, _failure: &ParseFailure) {
        self.parse_errors += 1;
    }

    pub fn record_entry(&mut self, entry: &LogEntry) {
        self.parsed_lines += 1;
        self.level_counts.increment(entry.level());

        let timestamp = entry.timestamp();
        match self.time_range.as_mut() {
            Some(range) => range.widen(timestamp),
            None => self.time_range = Some(TimeRange::at(timestamp)),
        }

        let bucket = match entry.level() {
            LogLevel::Error => &mut self.errors,
            LogLevel::Warn => &mut self.warnings,
            LogLevel::Info | LogLevel::Debug => return,
        };
        // Skip the message copy once the bucket only counts.
        if bucket.is_full() {
            bucket.count_overflow();
        } else {
            bucket.push(SampleEvent {
                timestamp,
                message: entry.message().to_string(),
            });
        }
    }

    pub fn fold(&mut self, outcome: &ParseOutcome) {
        match outcome {
            Ok(entry) => self.record_entry(entry),
            Err(failure) => self.record_failure(failure),
        }
    }

    /// Export the current state. Does not reset anything; the first snapshot
    /// taken at end of stream is the report.
    pub fn snapshot(&self) -> AnalysisSummary {
        AnalysisSummary {
            meta: AnalysisMeta {
                // Reported with millisecond precision, like every other instant.
                analyzed_at: Utc::now().trunc_subsecs(3),
                input_file: self.input_file.clone(),
                total_lines: self.total_lines,
                parsed_lines: self.parsed_lines,
                parse_errors: self.parse_errors,
            },
            time_range: self.time_range,
            summary: self.level_counts,
            errors: self.errors.to_collection(),
            warnings: self.warnings.to_collection(),
        }
    }

    pub fn input_file(&self) -> &str {
        &self.input_file
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn parsed_lines(&self) -> u64 {
        self.parsed_lines
    }

    pub fn parse_errors(&self) -> u64 {
        self.parse_errors
    }
}
