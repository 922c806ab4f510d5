//! Deterministic per-agent and host-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state (no contention, no ordering dependency).
//! - Adding or removing agents does not disturb the seeds of existing agents —
//!   a run replays identically as long as ids and the global seed are stable.
//! - Two machines built from the same seed and id produce identical behavior
//!   traces against identical collaborators.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, injected into the agent's behavior machine at
/// construction.
///
/// The machine draws idle waits and wander directions exclusively from this
/// stream, never from global random state.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// A point uniformly distributed inside the unit sphere, by rejection
    /// sampling (accepts ~52 % of draws, so ~1.9 cube samples per point).
    pub fn in_unit_sphere(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(
                self.0.gen_range(-1.0f32..=1.0),
                self.0.gen_range(-1.0f32..=1.0),
                self.0.gen_range(-1.0f32..=1.0),
            );
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
    }
}

// ── WorldRng ──────────────────────────────────────────────────────────────────

/// Host-level RNG for setup that is not owned by any one agent (scattering
/// spawn points, scripting a patrol route, picking scenario variants).
///
/// Used only in single-threaded or explicitly synchronised contexts.
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `WorldRng` with a different seed offset — useful for
    /// giving each setup concern its own deterministic stream.
    pub fn child(&mut self, offset: u64) -> WorldRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        WorldRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
