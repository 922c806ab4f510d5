//! The three collaborator traits consumed by the behavior machine.
//!
//! # Pluggability
//!
//! `prowl-brain` drives collaborators only through these traits, so hosts can
//! swap in adapters for their own navigation, target, and animation systems
//! without touching the behavior core.  All three are object-safe; the
//! machine's tick accepts either concrete implementations or `dyn` references.
//!
//! # Threading
//!
//! The traits carry no `Send`/`Sync` bounds: one machine and its collaborators
//! belong to one host thread.  Hosts that tick agents in parallel give each
//! worker its own agents and collaborators.

use prowl_core::Vec3;

// ── NavQueryResult ────────────────────────────────────────────────────────────

/// Result of a reachable-point query: a walkable position, or nothing usable
/// within the search radius.  No partial or degenerate results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavQueryResult {
    Reachable(Vec3),
    Unreachable,
}

impl NavQueryResult {
    /// The reachable position, if any.
    #[inline]
    pub fn reachable(self) -> Option<Vec3> {
        match self {
            NavQueryResult::Reachable(p) => Some(p),
            NavQueryResult::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, NavQueryResult::Reachable(_))
    }
}

// ── NavigationPort ────────────────────────────────────────────────────────────

/// Command/query surface of a navigation engine, scoped to one agent's body.
///
/// The port owns the agent's physical position: the machine reads it back
/// each tick rather than integrating motion itself.
pub trait NavigationPort {
    /// Current world position of the agent's body.
    fn position(&self) -> Vec3;

    /// Nearest reachable point to `origin` within `radius`, or
    /// [`NavQueryResult::Unreachable`] if the search comes up empty.
    ///
    /// Pure query — no path is issued.
    fn sample_reachable(&self, origin: Vec3, radius: f32) -> NavQueryResult;

    /// Start moving toward `destination` at `speed_mps`, replacing any path
    /// currently in flight and reorienting the body toward the destination.
    fn move_to(&mut self, destination: Vec3, speed_mps: f32);

    /// Distance left along the current path, `0.0` when no path is pending.
    fn remaining_distance(&self) -> f32;

    /// Radius around the destination inside which the engine reports arrival.
    fn stopping_threshold(&self) -> f32;

    /// `true` while a path is in flight (issued and not yet arrived or
    /// cancelled).
    fn has_pending_path(&self) -> bool;

    /// Abandon the current path, if any.  Afterwards
    /// [`has_pending_path`][Self::has_pending_path] returns `false`.
    fn cancel_path(&mut self);
}

// ── TargetLocator ─────────────────────────────────────────────────────────────

/// Resolves the pursuit target's position by the handle the locator was built
/// with.  `None` means the target cannot be located right now (despawned,
/// withdrawn, never published); callers treat that as "out of range".
pub trait TargetLocator {
    fn current_target_position(&self) -> Option<Vec3>;
}

// ── AnimationPort ─────────────────────────────────────────────────────────────

/// Side-effecting sink for animation playback.
pub trait AnimationPort {
    /// Start playing `clip` from its beginning.
    fn play(&mut self, clip: &str);

    /// Duration in seconds of the clip most recently started with
    /// [`play`][Self::play].  Implementations return a nominal default when
    /// nothing has been played yet.
    fn current_clip_duration(&self) -> f32;
}
