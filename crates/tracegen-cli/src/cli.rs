//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// tracegen - synthetic host activity generator
///
/// Performs real process, file, and network actions on request and
/// appends one structured record per action to an activity log, for
/// exercising detection and ingestion pipelines.
#[derive(Debug, Parser)]
#[command(
    name = "tracegen",
    version,
    about,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Destination of the activity log
    #[arg(
        long,
        global = true,
        env = "TRACEGEN_LOG",
        default_value = "activity_log.jsonl"
    )]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands, one per activity class.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a detached process with the given path and arguments
    StartProcess {
        /// Executable path or name
        path: String,
        /// Arguments passed to the new process
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Create a file at the specified path
    CreateFile {
        path: PathBuf,
    },
    /// Append a timestamped line to the file at the specified path
    ModifyFile {
        path: PathBuf,
    },
    /// Delete the file at the specified path
    DeleteFile {
        path: PathBuf,
    },
    /// Open a connection and transmit data to a destination
    NetworkActivity {
        /// Destination host
        destination: String,
        /// Destination port
        port: u16,
        /// Transport protocol (tcp or udp, case-insensitive)
        protocol: String,
        /// Payload to transmit
        data: String,
    },
}
