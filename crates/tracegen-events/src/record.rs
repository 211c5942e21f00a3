//! The activity record model.
//!
//! One record is appended to the activity log for every completed
//! action. The `type` tag and the per-type field names are a stable
//! wire contract; consumers must tolerate new record types appearing
//! in the future.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Actor;

/// File action discriminator stored on `file_*` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileAction {
    Create,
    Modify,
    Delete,
}

/// A single structured activity record.
///
/// Internally tagged on `type`; each variant carries exactly the
/// fields defined for its record type. Records are immutable once
/// written to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityRecord {
    /// A new process was spawned.
    ///
    /// The actor fields here describe the spawned process, not the
    /// invoker; `username` is the invoking account, which the child
    /// inherits.
    ProcessStart {
        timestamp: DateTime<Utc>,
        username: String,
        process_name: String,
        command_line: String,
        pid: u32,
    },
    /// A file was created (or truncated into existence).
    FileCreation {
        timestamp: DateTime<Utc>,
        path: String,
        action: FileAction,
        username: String,
        process_name: String,
        process_command_line: String,
        pid: u32,
    },
    /// An existing file was appended to.
    FileModification {
        timestamp: DateTime<Utc>,
        path: String,
        action: FileAction,
        username: String,
        process_name: String,
        process_command_line: String,
        pid: u32,
    },
    /// A file was removed.
    FileDeletion {
        timestamp: DateTime<Utc>,
        path: String,
        action: FileAction,
        username: String,
        process_name: String,
        process_command_line: String,
        pid: u32,
    },
    /// Data was transmitted to a remote endpoint.
    NetworkActivity {
        timestamp: DateTime<Utc>,
        host: String,
        port: u16,
        /// Byte length of the payload, not its character count.
        data_sent: u64,
        /// Protocol string exactly as the caller supplied it.
        protocol: String,
        /// Local address actually bound by the OS for this send.
        source_address: String,
        /// Local port actually bound by the OS for this send.
        source_port: u16,
        username: String,
        process_name: String,
        process_command_line: String,
        pid: u32,
    },
}

impl ActivityRecord {
    /// Build a `process_start` record for a freshly spawned child.
    pub fn process_start(
        timestamp: DateTime<Utc>,
        username: impl Into<String>,
        process_name: impl Into<String>,
        command_line: impl Into<String>,
        pid: u32,
    ) -> Self {
        Self::ProcessStart {
            timestamp,
            username: username.into(),
            process_name: process_name.into(),
            command_line: command_line.into(),
            pid,
        }
    }

    /// Build the file record whose variant matches `action`, so the
    /// `type` tag and the `action` field can never disagree.
    pub fn file(
        action: FileAction,
        timestamp: DateTime<Utc>,
        path: impl Into<String>,
        actor: Actor,
    ) -> Self {
        let Actor {
            username,
            process_name,
            command_line,
            pid,
        } = actor;
        let path = path.into();
        match action {
            FileAction::Create => Self::FileCreation {
                timestamp,
                path,
                action,
                username,
                process_name,
                process_command_line: command_line,
                pid,
            },
            FileAction::Modify => Self::FileModification {
                timestamp,
                path,
                action,
                username,
                process_name,
                process_command_line: command_line,
                pid,
            },
            FileAction::Delete => Self::FileDeletion {
                timestamp,
                path,
                action,
                username,
                process_name,
                process_command_line: command_line,
                pid,
            },
        }
    }

    /// Build a `network_activity` record for a completed transmission.
    #[allow(clippy::too_many_arguments)]
    pub fn network_activity(
        timestamp: DateTime<Utc>,
        host: impl Into<String>,
        port: u16,
        protocol: impl Into<String>,
        data_sent: u64,
        source_address: impl Into<String>,
        source_port: u16,
        actor: Actor,
    ) -> Self {
        let Actor {
            username,
            process_name,
            command_line,
            pid,
        } = actor;
        Self::NetworkActivity {
            timestamp,
            host: host.into(),
            port,
            data_sent,
            protocol: protocol.into(),
            source_address: source_address.into(),
            source_port,
            username,
            process_name,
            process_command_line: command_line,
            pid,
        }
    }
}
