//! Invoking-process identity resolution.

use std::env;

use tracegen_events::Actor;

use crate::error::ActionError;

/// Resolve the identity of the invoking process.
///
/// Resolution is fresh on every call; nothing is cached. Username
/// lookup goes through the OS account database and fails loudly when
/// the account cannot be resolved rather than defaulting.
pub fn resolve_actor() -> Result<Actor, ActionError> {
    Ok(Actor {
        username: username()?,
        process_name: process_name(),
        command_line: env::args().collect::<Vec<_>>().join(" "),
        pid: std::process::id(),
    })
}

fn process_name() -> String {
    env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .or_else(|| env::args().next())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(unix)]
fn username() -> Result<String, ActionError> {
    use nix::unistd::{geteuid, User};

    if let Ok(Some(user)) = User::from_uid(geteuid()) {
        return Ok(user.name);
    }

    // No passwd entry for the effective uid; fall back to whoami(1).
    let output = std::process::Command::new("whoami")
        .output()
        .map_err(|source| ActionError::Identity(format!("whoami fallback failed: {source}")))?;
    if output.status.success() {
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !name.is_empty() {
            return Ok(name);
        }
    }

    Err(ActionError::Identity(
        "could not resolve the current username".to_string(),
    ))
}

#[cfg(windows)]
fn username() -> Result<String, ActionError> {
    env::var("USERNAME")
        .map_err(|_| ActionError::Identity("USERNAME is not set".to_string()))
}
