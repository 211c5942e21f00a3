//! Command dispatch: one adapter operation per subcommand.

use tracegen_platform::{default_adapter, Adapter};
use tracegen_sink::ActivitySink;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Execute the parsed command and return the confirmation line to
/// print on stdout.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let sink = ActivitySink::new(&cli.log_file);
    let adapter = default_adapter(sink);

    let confirmation = match &cli.command {
        Command::StartProcess { path, args } => {
            let pid = adapter.start_process(path, args)?;
            format!("Started process {pid}")
        }
        Command::CreateFile { path } => {
            adapter.create_file(path)?;
            format!("Created file at {}", path.display())
        }
        Command::ModifyFile { path } => {
            adapter.modify_file(path)?;
            format!("Modified file at {}", path.display())
        }
        Command::DeleteFile { path } => {
            adapter.delete_file(path)?;
            format!("Deleted file at {}", path.display())
        }
        Command::NetworkActivity {
            destination,
            port,
            protocol,
            data,
        } => {
            adapter.send_network_activity(destination, *port, protocol, data)?;
            format!("Sent data to {destination}:{port}")
        }
    };
    Ok(confirmation)
}
