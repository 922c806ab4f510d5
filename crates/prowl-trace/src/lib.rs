//! `prowl-trace` — flight recorder for behavior events.
//!
//! Events drained from a `BehaviorMachine` are flattened into [`TraceRow`]s
//! and appended to a [`TraceSink`]:
//!
//! | Sink          | Destination                                          |
//! |---------------|------------------------------------------------------|
//! | [`CsvTrace`]  | a CSV file (`agent_id, at_secs, event, detail`)      |
//! | [`MemoryTrace`] | an in-process `Vec`, for tests and post-processing |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut trace = CsvTrace::create(Path::new("behavior_trace.csv"))?;
//! let agent = machine.agent();
//! for event in machine.drain_events() {
//!     trace.record(&TraceRow::from_event(agent, &event))?;
//! }
//! trace.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod row;
pub mod sink;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvTrace;
pub use error::{TraceError, TraceResult};
pub use memory::MemoryTrace;
pub use row::TraceRow;
pub use sink::TraceSink;
