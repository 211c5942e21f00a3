//! File activity executors.
//!
//! Each executor mutates the filesystem first and logs only after the
//! mutation succeeded, so a failed action never leaves a record.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracegen_events::{ActivityRecord, FileAction};
use tracegen_sink::ActivitySink;

use crate::error::ActionError;
use crate::identity;

/// Create an empty file at `path`, truncating any existing content.
pub(crate) fn create_file(sink: &ActivitySink, path: &Path) -> Result<(), ActionError> {
    let timestamp = Utc::now();
    fs::write(path, b"").map_err(|e| io_error(path, e))?;
    log_file_action(sink, FileAction::Create, timestamp, path)
}

/// Append a single timestamped line to an existing file at `path`.
///
/// Fails with [`ActionError::NotFound`] if the file does not exist.
pub(crate) fn modify_file(sink: &ActivitySink, path: &Path) -> Result<(), ActionError> {
    let timestamp = Utc::now();
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    writeln!(file, "Modified at {timestamp}").map_err(|e| io_error(path, e))?;
    log_file_action(sink, FileAction::Modify, timestamp, path)
}

/// Remove the file at `path`.
///
/// Fails with [`ActionError::NotFound`] if the file does not exist.
pub(crate) fn delete_file(sink: &ActivitySink, path: &Path) -> Result<(), ActionError> {
    let timestamp = Utc::now();
    fs::remove_file(path).map_err(|e| io_error(path, e))?;
    log_file_action(sink, FileAction::Delete, timestamp, path)
}

fn io_error(path: &Path, source: std::io::Error) -> ActionError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ActionError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        ActionError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn log_file_action(
    sink: &ActivitySink,
    action: FileAction,
    timestamp: DateTime<Utc>,
    path: &Path,
) -> Result<(), ActionError> {
    let actor = identity::resolve_actor()?;
    let record = ActivityRecord::file(action, timestamp, path.to_string_lossy(), actor);
    sink.append(&record)?;
    Ok(())
}
