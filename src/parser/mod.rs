pub mod line;
pub mod regex_error;
pub mod regex_patterns;

pub use line::{FailureReason, LineParser, ParseFailure, ParseOutcome, parse_line};
pub use regex_error::RegexError;
pub use regex_patterns::{LOG_LINE, StaticPattern};
