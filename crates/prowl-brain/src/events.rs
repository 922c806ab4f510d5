//! Behavior events, buffered per machine and drained by the host.

use prowl_core::Vec3;

use crate::state::AgentState;

/// One recorded behavior event, stamped with the machine's age at the time
/// it fired.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrainEvent {
    /// Seconds of ticked time the machine had consumed, including the tick
    /// that produced this event.
    pub at_secs: f32,
    pub kind:    BrainEventKind,
}

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BrainEventKind {
    /// The public state changed. Fires once per actual change; a pursuit
    /// re-issue stays in `Pursuing` and shows up as `DestinationChosen`
    /// instead.
    Transition { from: AgentState, to: AgentState },
    /// A move command was issued toward `destination`.
    DestinationChosen { destination: Vec3 },
    /// Destination sampling spent its whole retry budget without finding
    /// reachable ground; the agent stays put.
    SampleExhausted { attempts: u32 },
    /// A walk missed its time budget and was cancelled.
    Stalled { walked_secs: f32 },
    /// An attack swing began.
    AttackStarted,
}

impl BrainEventKind {
    /// Stable label for trace output.
    pub fn label(&self) -> &'static str {
        match self {
            BrainEventKind::Transition { .. } => "transition",
            BrainEventKind::DestinationChosen { .. } => "destination",
            BrainEventKind::SampleExhausted { .. } => "sample_exhausted",
            BrainEventKind::Stalled { .. } => "stalled",
            BrainEventKind::AttackStarted => "attack",
        }
    }
}
