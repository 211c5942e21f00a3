//! Platform action executors for tracegen.
//!
//! Each executor performs one real side-effecting action (process
//! launch, file mutation, outbound transmission), samples its metadata
//! around the action, and appends exactly one activity record through
//! the sink. The [`Adapter`] trait is the platform boundary: one
//! implementation is selected at startup for the build target.

mod adapter;
mod error;
mod file;
mod identity;
mod network;
mod process;

#[cfg(unix)]
pub use adapter::UnixAdapter;
#[cfg(windows)]
pub use adapter::WindowsAdapter;
pub use adapter::{default_adapter, Adapter};
pub use error::ActionError;
pub use identity::resolve_actor;
pub use network::NetworkSummary;
