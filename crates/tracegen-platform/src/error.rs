//! Error taxonomy for action executors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracegen_sink::SinkError;

/// Failure of one action invocation.
///
/// Errors are local to a single invocation and never retried
/// internally. `LogWrite` is the one outcome where the side effect
/// already happened but its record could not be appended; callers must
/// report it distinctly from a failed action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The executable could not be found or spawned.
    #[error("failed to start process {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file targeted by a modify or delete does not exist.
    #[error("no such file: {}", path.display())]
    NotFound { path: PathBuf },

    /// A filesystem failure other than a missing target.
    #[error("file operation failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The protocol string is neither `tcp` nor `udp`.
    #[error("invalid protocol: {0}")]
    InvalidProtocol(String),

    /// The destination could not be reached or the send failed.
    #[error("network activity to {destination} failed: {source}")]
    Network {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// The invoking account could not be resolved.
    #[error("identity resolution failed: {0}")]
    Identity(String),

    /// The action succeeded but its record could not be appended.
    #[error(transparent)]
    LogWrite(#[from] SinkError),
}
