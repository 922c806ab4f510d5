//! The `TraceSink` trait implemented by all trace backends.

use crate::{TraceResult, TraceRow};

/// Destination for flattened behavior events.
pub trait TraceSink {
    /// Append one row.
    fn record(&mut self, row: &TraceRow) -> TraceResult<()>;

    /// Flush and close the sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}
