//! In-memory trace backend.

use crate::sink::TraceSink;
use crate::{TraceResult, TraceRow};

/// Keeps rows in a `Vec` for hosts that post-process events themselves, and
/// for tests that assert on recorded behavior.
#[derive(Debug, Default)]
pub struct MemoryTrace {
    rows:     Vec<TraceRow>,
    finished: bool,
}

impl MemoryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl TraceSink for MemoryTrace {
    fn record(&mut self, row: &TraceRow) -> TraceResult<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        self.finished = true;
        Ok(())
    }
}
