//! Forward-only line feed over a file.
//!
//! Reads through a fixed 64 KiB buffer; the file is never held in memory as a
//! whole. `\n`, `\r\n` and a lone `\r` each end exactly one line, and a final
//! unterminated line is still yielded.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const READ_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read log file {path}: could not open: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

pub struct LineSource {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
    lines_read: u64,
    // The previous line ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl LineSource {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Self::open_with_capacity(path, READ_BUFFER_SIZE).await
    }

    pub async fn open_with_capacity(
        path: impl AsRef<Path>,
        capacity: usize,
    ) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).await.map_err(|source| SourceError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            reader: BufReader::with_capacity(capacity, file),
            buf: Vec::with_capacity(256),
            lines_read: 0,
            skip_lf: false,
        })
    }

    /// Next line without its terminator, or `Ok(None)` at end of file.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the run.
    pub async fn next_line(&mut self) -> Result<Option<String>, SourceError> {
        self.buf.clear();
        let mut terminated = false;

        loop {
            let available = self
                .reader
                .fill_buf()
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    line: self.lines_read + 1,
                    source,
                })?;

            if available.is_empty() {
                break;
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.skip_lf = available[end] == b'\r';
                    self.buf.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    terminated = true;
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !terminated && self.buf.is_empty() {
            return Ok(None);
        }

        self.lines_read += 1;
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
