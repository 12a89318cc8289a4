// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // Line counts stay far below usize::MAX
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. SourceError in source module
    clippy::must_use_candidate,       // Annotated selectively on critical APIs
    clippy::doc_markdown              // Internal API
)]

pub mod analyzer;
pub mod app;
pub mod domain;
pub mod parser;
pub mod report;
pub mod source;

// Re-export main types for easy access
pub use analyzer::Analyzer;
pub use app::{App, Config};
pub use domain::{AnalysisSummary, LogEntry, LogLevel, SentinelError};
pub use parser::{ParseOutcome, parse_line};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
