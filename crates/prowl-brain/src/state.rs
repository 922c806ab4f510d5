//! The observable behavior states.

use std::fmt;

/// What an agent is doing right now.
///
/// A machine holds exactly one state at a time and changes it only inside
/// [`BehaviorMachine::tick`](crate::BehaviorMachine::tick) and
/// [`force_idle`](crate::BehaviorMachine::force_idle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Resting in place, waiting out a randomized delay.
    #[default]
    Idle,
    /// Walking toward a sampled wander destination.
    Moving,
    /// Chasing the target's last published position.
    Pursuing,
    /// In melee range, cycling attack swings.
    Attacking,
}

impl AgentState {
    /// Stable label, used for trace rows and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Idle => "Idle",
            AgentState::Moving => "Moving",
            AgentState::Pursuing => "Pursuing",
            AgentState::Attacking => "Attacking",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
