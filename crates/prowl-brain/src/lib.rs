//! `prowl-brain` — the NPC behavior core.
//!
//! A [`BehaviorMachine`] is a deterministic, tick-driven state machine that
//! makes one agent idle, wander, pursue, and attack. It talks to the scene
//! exclusively through the port traits in `prowl-scene`, which keeps it free
//! of engine types and testable with stubs.
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | `state`   | [`AgentState`], the public state enum                |
//! | `config`  | [`BehaviorConfig`] tuning and its validation         |
//! | `machine` | [`BehaviorMachine`] and the per-state tick handlers  |
//! | `events`  | [`BrainEvent`] records drained by the host           |
//! | `error`   | [`BrainError`] construction failures                 |
//!
//! Construction is the only fallible step: a config that validates yields a
//! machine whose `tick` never errors. Randomness comes from an injected
//! [`prowl_core::AgentRng`], so equal seeds replay equal behavior.

pub mod config;
pub mod error;
pub mod events;
pub mod machine;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BehaviorConfig;
pub use error::{BrainError, BrainResult};
pub use events::{BrainEvent, BrainEventKind};
pub use machine::{
    ATTACK_PAUSE_SECS, BehaviorMachine, CLIP_ATTACK, CLIP_WALK, MAX_SAMPLE_ATTEMPTS,
};
pub use state::AgentState;
