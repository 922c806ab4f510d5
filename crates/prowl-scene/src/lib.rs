//! `prowl-scene` — collaborator seams between a behavior machine and its host.
//!
//! The behavior core (`prowl-brain`) never talks to an engine directly; it
//! drives the three port traits defined here.  Production hosts adapt their
//! own navigation/animation systems behind these traits.  This crate also
//! ships reference implementations good enough for headless tests and demos:
//! straight-line navigation over walkable boxes, an explicit target registry,
//! and a clip-duration table.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ports`]     | `NavigationPort`, `TargetLocator`, `AnimationPort`, `NavQueryResult` |
//! | [`navigator`] | `NavField`, `NavFieldBuilder`, `FieldNavigator`       |
//! | [`targets`]   | `TargetBoard`, `BoardLocator`                         |
//! | [`anim`]      | `ClipCatalog`, `ClipPlayer`                           |
//! | [`error`]     | `SceneError`, `SceneResult`                           |

pub mod anim;
pub mod error;
pub mod navigator;
pub mod ports;
pub mod targets;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use anim::{ClipCatalog, ClipPlayer};
pub use error::{SceneError, SceneResult};
pub use navigator::{FieldNavigator, NavField, NavFieldBuilder, WalkBox};
pub use ports::{AnimationPort, NavQueryResult, NavigationPort, TargetLocator};
pub use targets::{BoardLocator, TargetBoard};
