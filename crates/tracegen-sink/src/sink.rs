//! JSON Lines append sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracegen_events::ActivityRecord;
use tracing::debug;

/// Failure to durably append a record.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The record could not be serialized.
    #[error("failed to serialize activity record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The destination could not be opened or written.
    #[error("failed to append to activity log {}: {source}", path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Append-only JSON Lines sink.
///
/// The destination path is fixed at construction; there is no ambient
/// mutable log location. Each [`append`](ActivitySink::append) opens
/// the destination in append mode, writes one complete line with a
/// single write, flushes, and closes, so concurrent invocations
/// sharing a destination never interleave partial lines.
#[derive(Debug, Clone)]
pub struct ActivitySink {
    path: PathBuf,
}

impl ActivitySink {
    /// Create a sink writing to `path`. The file is created lazily on
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path of this sink.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `record` and append it as one complete line.
    ///
    /// The line is fully written and flushed before this returns; on
    /// error the log is left without a partial line.
    pub fn append(&self, record: &ActivityRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.append_error(e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.append_error(e))?;
        file.flush().map_err(|e| self.append_error(e))?;

        debug!(path = %self.path.display(), "appended activity record");
        Ok(())
    }

    fn append_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Append {
            path: self.path.clone(),
            source,
        }
    }
}
