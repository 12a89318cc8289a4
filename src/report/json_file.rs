// Write the summary as one pretty-printed JSON document.
// The document goes to a hidden sibling file first and is renamed over the
// destination only after it is fully written and synced, so a failed run never
// leaves a truncated report behind.

use super::{ReportSink, SinkError};
use crate::domain::AnalysisSummary;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialized form: two-space indentation with a trailing newline.
    pub fn render(summary: &AnalysisSummary) -> Result<Vec<u8>, SinkError> {
        let mut document = serde_json::to_vec_pretty(summary)?;
        document.push(b'\n');
        Ok(document)
    }

    fn staging_path(&self) -> Result<PathBuf, SinkError> {
        let file_name = self.path.file_name().ok_or_else(|| SinkError::Write {
            path: self.path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "output path has no file name",
            ),
        })?;

        let mut staging_name = std::ffi::OsString::from(".");
        staging_name.push(file_name);
        staging_name.push(format!(".{}.tmp", std::process::id()));
        Ok(self.path.with_file_name(staging_name))
    }

    pub async fn write(&self, summary: &AnalysisSummary) -> Result<(), SinkError> {
        let document = Self::render(summary)?;
        let staging = self.staging_path()?;

        if let Err(source) = write_synced(&staging, &document).await {
            discard(&staging).await;
            return Err(SinkError::Write {
                path: self.path.clone(),
                source,
            });
        }

        if let Err(source) = fs::rename(&staging, &self.path).await {
            discard(&staging).await;
            return Err(SinkError::Persist {
                path: self.path.clone(),
                source,
            });
        }

        debug!(
            path = %self.path.display(),
            bytes = document.len(),
            "report written"
        );
        Ok(())
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

async fn discard(staging: &Path) {
    match fs::remove_file(staging).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove staging file {staging:?}: {e}"),
    }
}

impl ReportSink for JsonFileSink {
    fn write_report<'a>(
        &'a self,
        summary: &'a AnalysisSummary,
    ) -> Pin<Box<dyn Future<Output = Result<(), SinkError>> + Send + 'a>> {
        Box::pin(self.write(summary))
    }
}
