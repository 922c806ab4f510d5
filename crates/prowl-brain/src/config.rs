//! Per-agent behavior tuning.

use crate::error::{BrainError, BrainResult};

/// Immutable tuning for one behavior machine.
///
/// Validated once by [`BehaviorMachine::new`](crate::BehaviorMachine::new);
/// a machine that exists is guaranteed to hold a usable config, so the tick
/// path never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorConfig {
    /// Wander destinations are drawn within this radius of the agent.
    pub wander_radius_m: f32,
    /// Movement speed while wandering.
    pub walk_speed_mps: f32,
    /// Movement speed while chasing the target.
    pub pursue_speed_mps: f32,
    /// Stall guard: a walk that has not arrived within this many seconds is
    /// cancelled and the agent rests instead.
    pub max_walk_secs: f32,
    /// Lower bound of the idle wait band.
    pub idle_min_secs: f32,
    /// Upper bound of the idle wait band. Each idle draws uniformly from
    /// `[idle_min_secs, idle_max_secs]`.
    pub idle_max_secs: f32,
    /// A target inside this radius when an idle ends triggers pursuit.
    pub pursue_radius_m: f32,
    /// A target inside this radius on arrival triggers melee. Must be
    /// strictly smaller than `pursue_radius_m`.
    pub attack_radius_m: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            wander_radius_m:  50.0,
            walk_speed_mps:   5.0,
            pursue_speed_mps: 8.0,
            max_walk_secs:    6.0,
            idle_min_secs:    2.5,
            idle_max_secs:    10.0,
            pursue_radius_m:  10.0,
            attack_radius_m:  2.0,
        }
    }
}

impl BehaviorConfig {
    /// Default tuning with the idle band spread around `base` as
    /// `[base / 2, base * 2]`.
    pub fn with_idle_secs(base: f32) -> Self {
        Self {
            idle_min_secs: base * 0.5,
            idle_max_secs: base * 2.0,
            ..Self::default()
        }
    }

    /// Check every constraint, reporting the first violation.
    pub fn validate(&self) -> BrainResult<()> {
        for (field, value) in [
            ("wander_radius_m",  self.wander_radius_m),
            ("walk_speed_mps",   self.walk_speed_mps),
            ("pursue_speed_mps", self.pursue_speed_mps),
            ("max_walk_secs",    self.max_walk_secs),
            ("idle_min_secs",    self.idle_min_secs),
            ("idle_max_secs",    self.idle_max_secs),
            ("pursue_radius_m",  self.pursue_radius_m),
            ("attack_radius_m",  self.attack_radius_m),
        ] {
            // NaN fails this comparison as well.
            if !(value > 0.0) {
                return Err(BrainError::NonPositiveConfig { field, value });
            }
        }
        if self.idle_min_secs > self.idle_max_secs {
            return Err(BrainError::IdleBand {
                min_secs: self.idle_min_secs,
                max_secs: self.idle_max_secs,
            });
        }
        if self.attack_radius_m >= self.pursue_radius_m {
            return Err(BrainError::RadiusOrder {
                attack_m: self.attack_radius_m,
                pursue_m: self.pursue_radius_m,
            });
        }
        Ok(())
    }
}
