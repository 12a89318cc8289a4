//! Single-grammar line parser.
//!
//! Validation runs structure, then level, then timestamp, so a malformed line
//! is always reported with the most specific reason available.

use super::regex_patterns::LOG_LINE;
use crate::domain::{LogEntry, LogLevel, instant};
use std::fmt;
use thiserror::Error;

pub type ParseOutcome = Result<LogEntry, ParseFailure>;

// Trimmed along with whitespace; a UTF-8 file may start with one.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    EmptyLine,
    GrammarMismatch,
    UnrecognizedLevel,
    InvalidTimestamp,
}

impl FailureReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureReason::EmptyLine => "empty line",
            FailureReason::GrammarMismatch => "grammar mismatch",
            FailureReason::UnrecognizedLevel => "unrecognized level",
            FailureReason::InvalidTimestamp => "invalid timestamp",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line that could not be turned into a [`LogEntry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ParseFailure {
    reason: FailureReason,
    raw: String,
}

impl ParseFailure {
    fn new(reason: FailureReason, raw: &str) -> Self {
        Self {
            reason,
            raw: raw.to_string(),
        }
    }

    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Stateless parser handle; [`parse_line`] is the same operation as a free
/// function.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineParser;

impl LineParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> ParseOutcome {
        parse_line(raw)
    }
}

pub fn parse_line(raw: &str) -> ParseOutcome {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    if trimmed.is_empty() {
        return Err(ParseFailure::new(FailureReason::EmptyLine, raw));
    }

    // An uncompilable grammar matches nothing.
    let captures = LOG_LINE
        .get()
        .ok()
        .and_then(|regex| regex.captures(trimmed))
        .ok_or_else(|| ParseFailure::new(FailureReason::GrammarMismatch, raw))?;
    let (_, [timestamp, token, message]) = captures.extract();

    let level: LogLevel = token
        .parse()
        .map_err(|_| ParseFailure::new(FailureReason::UnrecognizedLevel, raw))?;

    let timestamp = instant::parse(timestamp)
        .ok_or_else(|| ParseFailure::new(FailureReason::InvalidTimestamp, raw))?;

    Ok(LogEntry::new(timestamp, level, message, raw))
}
