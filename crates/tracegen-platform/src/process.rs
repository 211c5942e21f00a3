//! Process launch executor.

use std::path::Path;
use std::process::Command;

use chrono::Utc;
use tracegen_events::ActivityRecord;
use tracegen_sink::ActivitySink;
use tracing::debug;

use crate::error::ActionError;
use crate::identity;

/// Spawn `path` with `args` as a detached child and log a
/// `process_start` record describing the new process.
///
/// The child is not waited on and its exit status is not this action's
/// failure. Returns the OS-assigned pid of the child. Nothing is
/// logged if the spawn itself fails.
pub(crate) fn start_process(
    sink: &ActivitySink,
    path: &str,
    args: &[String],
) -> Result<u32, ActionError> {
    let timestamp = Utc::now();

    let child = Command::new(path)
        .args(args)
        .spawn()
        .map_err(|source| ActionError::Spawn {
            path: path.to_string(),
            source,
        })?;
    let pid = child.id();
    // Dropping the handle detaches the child; its lifetime is
    // independent of this invocation.
    drop(child);
    debug!(pid, path, "spawned detached child");

    let username = identity::resolve_actor()?.username;
    let process_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let command_line = std::iter::once(path.to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");

    let record =
        ActivityRecord::process_start(timestamp, username, process_name, command_line, pid);
    sink.append(&record)?;
    Ok(pid)
}
