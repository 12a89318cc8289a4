pub mod json_file;

use crate::domain::AnalysisSummary;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use thiserror::Error;

pub use json_file::JsonFileSink;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report {path}: could not move finished report into place: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for the finished summary.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
pub trait ReportSink: Send + Sync {
    fn write_report<'a>(
        &'a self,
        summary: &'a AnalysisSummary,
    ) -> Pin<Box<dyn Future<Output = Result<(), SinkError>> + Send + 'a>>;
}
