//! Activity record types for tracegen.

mod actor;
mod record;

pub use actor::Actor;
pub use record::{ActivityRecord, FileAction};
