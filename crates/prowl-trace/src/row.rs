//! The flat row format shared by all trace sinks.

use prowl_brain::{BrainEvent, BrainEventKind};
use prowl_core::AgentId;

/// One behavior event flattened for tabular output.
///
/// `event` is the stable label from [`BrainEventKind::label`], `detail` a
/// human-readable payload whose shape depends on the event.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub agent_id: u32,
    pub at_secs:  f32,
    pub event:    &'static str,
    pub detail:   String,
}

impl TraceRow {
    /// Flatten one drained event for `agent`.
    pub fn from_event(agent: AgentId, event: &BrainEvent) -> Self {
        let detail = match event.kind {
            BrainEventKind::Transition { from, to } => format!("{from}->{to}"),
            BrainEventKind::DestinationChosen { destination } => destination.to_string(),
            BrainEventKind::SampleExhausted { attempts } => format!("attempts={attempts}"),
            BrainEventKind::Stalled { walked_secs } => format!("walked_secs={walked_secs:.2}"),
            BrainEventKind::AttackStarted => String::new(),
        };
        Self {
            agent_id: agent.0,
            at_secs: event.at_secs,
            event: event.kind.label(),
            detail,
        }
    }
}
