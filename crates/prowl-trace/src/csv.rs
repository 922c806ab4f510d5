//! CSV trace backend.
//!
//! Writes one file with the columns `agent_id, at_secs, event, detail`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::sink::TraceSink;
use crate::{TraceResult, TraceRow};

/// Appends behavior events to a CSV file.
pub struct CsvTrace {
    writer:   Writer<File>,
    finished: bool,
}

impl CsvTrace {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> TraceResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["agent_id", "at_secs", "event", "detail"])?;
        Ok(Self { writer, finished: false })
    }
}

impl TraceSink for CsvTrace {
    fn record(&mut self, row: &TraceRow) -> TraceResult<()> {
        self.writer.write_record(&[
            row.agent_id.to_string(),
            row.at_secs.to_string(),
            row.event.to_string(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
