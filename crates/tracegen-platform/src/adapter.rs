//! The platform adapter boundary.
//!
//! One adapter is selected for the build target at startup and never
//! swapped at runtime. Every adapter provides the same five
//! operations; what differs between platforms is how identity and the
//! underlying primitives are reached.

use std::path::Path;

use tracegen_sink::ActivitySink;

use crate::error::ActionError;
use crate::network::NetworkSummary;
use crate::{file, network, process};

/// The platform capability set.
pub trait Adapter {
    /// Spawn a detached process; returns the child pid.
    fn start_process(&self, path: &str, args: &[String]) -> Result<u32, ActionError>;

    /// Create an empty file, truncating any existing content.
    fn create_file(&self, path: &Path) -> Result<(), ActionError>;

    /// Append a timestamped line to an existing file.
    fn modify_file(&self, path: &Path) -> Result<(), ActionError>;

    /// Remove a file.
    fn delete_file(&self, path: &Path) -> Result<(), ActionError>;

    /// Transmit data to `destination:port` over tcp or udp.
    fn send_network_activity(
        &self,
        destination: &str,
        port: u16,
        protocol: &str,
        data: &str,
    ) -> Result<NetworkSummary, ActionError>;
}

/// Unix-family adapter: std process/fs/net primitives with
/// passwd-database identity resolution.
#[cfg(unix)]
#[derive(Debug, Clone)]
pub struct UnixAdapter {
    sink: ActivitySink,
}

#[cfg(unix)]
impl UnixAdapter {
    /// Create an adapter logging through `sink`.
    pub fn new(sink: ActivitySink) -> Self {
        Self { sink }
    }
}

#[cfg(unix)]
impl Adapter for UnixAdapter {
    fn start_process(&self, path: &str, args: &[String]) -> Result<u32, ActionError> {
        process::start_process(&self.sink, path, args)
    }

    fn create_file(&self, path: &Path) -> Result<(), ActionError> {
        file::create_file(&self.sink, path)
    }

    fn modify_file(&self, path: &Path) -> Result<(), ActionError> {
        file::modify_file(&self.sink, path)
    }

    fn delete_file(&self, path: &Path) -> Result<(), ActionError> {
        file::delete_file(&self.sink, path)
    }

    fn send_network_activity(
        &self,
        destination: &str,
        port: u16,
        protocol: &str,
        data: &str,
    ) -> Result<NetworkSummary, ActionError> {
        network::send_network_activity(&self.sink, destination, port, protocol, data)
    }
}

/// Windows adapter: the same capability set over the platform's
/// process/socket primitives, with environment-based identity
/// resolution.
#[cfg(windows)]
#[derive(Debug, Clone)]
pub struct WindowsAdapter {
    sink: ActivitySink,
}

#[cfg(windows)]
impl WindowsAdapter {
    /// Create an adapter logging through `sink`.
    pub fn new(sink: ActivitySink) -> Self {
        Self { sink }
    }
}

#[cfg(windows)]
impl Adapter for WindowsAdapter {
    fn start_process(&self, path: &str, args: &[String]) -> Result<u32, ActionError> {
        process::start_process(&self.sink, path, args)
    }

    fn create_file(&self, path: &Path) -> Result<(), ActionError> {
        file::create_file(&self.sink, path)
    }

    fn modify_file(&self, path: &Path) -> Result<(), ActionError> {
        file::modify_file(&self.sink, path)
    }

    fn delete_file(&self, path: &Path) -> Result<(), ActionError> {
        file::delete_file(&self.sink, path)
    }

    fn send_network_activity(
        &self,
        destination: &str,
        port: u16,
        protocol: &str,
        data: &str,
    ) -> Result<NetworkSummary, ActionError> {
        network::send_network_activity(&self.sink, destination, port, protocol, data)
    }
}

/// Select the adapter for the build target.
#[cfg(unix)]
pub fn default_adapter(sink: ActivitySink) -> UnixAdapter {
    UnixAdapter::new(sink)
}

/// Select the adapter for the build target.
#[cfg(windows)]
pub fn default_adapter(sink: ActivitySink) -> WindowsAdapter {
    WindowsAdapter::new(sink)
}
