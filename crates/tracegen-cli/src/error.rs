//! CLI error handling and exit-code mapping.

use thiserror::Error;
use tracegen_platform::ActionError;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl CliError {
    /// Exit code per error class. "Action succeeded but the log write
    /// failed" gets its own code so callers can tell it apart from a
    /// failed action.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Action(ActionError::Spawn { .. }) => 2,
            Self::Action(ActionError::NotFound { .. }) => 3,
            Self::Action(ActionError::InvalidProtocol(_)) => 4,
            Self::Action(ActionError::Network { .. }) => 5,
            Self::Action(ActionError::LogWrite(_)) => 6,
            Self::Action(_) => 1,
        }
    }
}
