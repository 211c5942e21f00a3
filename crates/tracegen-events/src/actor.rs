//! Invoking-process identity.

use serde::{Deserialize, Serialize};

/// Identity of the process performing an activity.
///
/// Resolved fresh at the moment an action is invoked and folded into
/// the record built for that action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// OS-reported username of the running account.
    pub username: String,
    /// Name of the currently executing program.
    pub process_name: String,
    /// Full command line of the currently executing program.
    pub command_line: String,
    /// OS-assigned process id.
    pub pid: u32,
}
