//! `prowl-core` — foundational types for the `prowl` NPC behavior framework.
//!
//! This crate is a dependency of every other `prowl-*` crate.  It intentionally
//! has no `prowl-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                     |
//! |----------|----------------------------------------------|
//! | [`math`] | `Vec3`, world-space positions and distances  |
//! | [`ids`]  | `AgentId`, `TargetId`                        |
//! | [`rng`]  | `AgentRng` (per-agent), `WorldRng` (host)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod math;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, TargetId};
pub use math::Vec3;
pub use rng::{AgentRng, WorldRng};
