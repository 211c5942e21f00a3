//! Append-only activity log sink for tracegen.

mod sink;

pub use sink::{ActivitySink, SinkError};
