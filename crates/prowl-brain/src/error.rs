//! Error type for behavior-machine construction.

use thiserror::Error;

/// Configuration failures caught when a machine is built.
///
/// These are the only errors the crate surfaces. Runtime conditions such as
/// a vanished target, an exhausted destination search, or a stalled walk are
/// absorbed inside [`BehaviorMachine::tick`](crate::BehaviorMachine::tick)
/// by falling back to `Idle`.
#[derive(Debug, Error)]
pub enum BrainError {
    /// A scalar parameter was zero, negative, or NaN.
    #[error("config field `{field}` must be positive, got {value}")]
    NonPositiveConfig { field: &'static str, value: f32 },

    /// The idle wait band has its bounds swapped.
    #[error("idle band inverted: min {min_secs} s > max {max_secs} s")]
    IdleBand { min_secs: f32, max_secs: f32 },

    /// Melee range must sit strictly inside detection range, or arrival at
    /// a pursued target could never end in an attack.
    #[error("attack radius {attack_m} m must be smaller than pursue radius {pursue_m} m")]
    RadiusOrder { attack_m: f32, pursue_m: f32 },
}

/// Convenience alias for fallible behavior operations.
pub type BrainResult<T> = Result<T, BrainError>;
