//! Walkable field and the reference straight-line navigator.
//!
//! # Scope
//!
//! `FieldNavigator` is the navigation stand-in for headless tests and demos:
//! it steers the body in a straight line toward the commanded destination and
//! answers reachability queries against a set of walkable boxes.  There is no
//! obstacle avoidance and no path planning — a production host adapts its own
//! navigation engine behind [`NavigationPort`] instead.

use std::sync::Arc;

use prowl_core::Vec3;

use crate::error::{SceneError, SceneResult};
use crate::ports::{NavQueryResult, NavigationPort};

// ── Walkable volumes ──────────────────────────────────────────────────────────

/// An axis-aligned walkable box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl WalkBox {
    /// Nearest point of the box to `p` (`p` itself when inside).
    #[inline]
    pub fn clamp(self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min.x, self.max.x),
            p.y.clamp(self.min.y, self.max.y),
            p.z.clamp(self.min.z, self.max.z),
        )
    }

    #[inline]
    pub fn contains(self, p: Vec3) -> bool {
        self.clamp(p) == p
    }

    #[inline]
    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// The set of walkable volumes agents can stand on.
///
/// Shared read-only between navigators via `Arc`; build once per scene with
/// [`NavFieldBuilder`].
#[derive(Debug)]
pub struct NavField {
    boxes: Vec<WalkBox>,
}

impl NavField {
    pub fn builder() -> NavFieldBuilder {
        NavFieldBuilder::new()
    }

    pub fn boxes(&self) -> &[WalkBox] {
        &self.boxes
    }

    pub fn contains(&self, p: Vec3) -> bool {
        self.boxes.iter().any(|b| b.contains(p))
    }

    /// Nearest walkable point to `point` within `radius`.
    ///
    /// Clamps `point` into every box and keeps the closest candidate; a point
    /// already inside a box resolves to itself at distance zero.
    pub fn nearest_reachable(&self, point: Vec3, radius: f32) -> NavQueryResult {
        let mut best: Option<(f32, Vec3)> = None;
        for b in &self.boxes {
            let candidate = b.clamp(point);
            let dist_sq = candidate.distance_squared(point);
            if best.is_none_or(|(best_sq, _)| dist_sq < best_sq) {
                best = Some((dist_sq, candidate));
            }
        }
        match best {
            Some((dist_sq, p)) if dist_sq <= radius * radius => NavQueryResult::Reachable(p),
            _ => NavQueryResult::Unreachable,
        }
    }
}

// ── NavFieldBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavField`], then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use prowl_core::Vec3;
/// use prowl_scene::NavFieldBuilder;
///
/// let field = NavFieldBuilder::new()
///     .walkable(Vec3::ZERO, Vec3::new(40.0, 0.0, 40.0))
///     .build()
///     .unwrap();
/// assert!(field.contains(Vec3::new(10.0, 0.0, 10.0)));
/// ```
pub struct NavFieldBuilder {
    boxes: Vec<WalkBox>,
}

impl NavFieldBuilder {
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Add a walkable box spanning `min..=max` on every axis.
    pub fn walkable(mut self, min: Vec3, max: Vec3) -> Self {
        self.boxes.push(WalkBox { min, max });
        self
    }

    /// Validate and build.  Rejects a field with no boxes and any box whose
    /// extents are inverted on some axis.
    pub fn build(self) -> SceneResult<NavField> {
        if self.boxes.is_empty() {
            return Err(SceneError::EmptyField);
        }
        for b in &self.boxes {
            if b.min.x > b.max.x || b.min.y > b.max.y || b.min.z > b.max.z {
                return Err(SceneError::InvertedBox { min: b.min, max: b.max });
            }
        }
        Ok(NavField { boxes: self.boxes })
    }
}

impl Default for NavFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── FieldNavigator ────────────────────────────────────────────────────────────

/// Reference [`NavigationPort`]: one agent's kinematic body over a shared
/// [`NavField`].
///
/// The host integrates motion by calling [`advance`](Self::advance) once per
/// frame, after the behavior machine's tick has issued its commands.
pub struct FieldNavigator {
    field:       Arc<NavField>,
    position:    Vec3,
    heading:     Vec3,
    speed_mps:   f32,
    destination: Option<Vec3>,
    stop_m:      f32,
}

impl FieldNavigator {
    pub const DEFAULT_STOP_M: f32 = 0.5;

    /// A stationary body at `spawn`, facing +Z.
    pub fn new(field: Arc<NavField>, spawn: Vec3) -> Self {
        Self {
            field,
            position:    spawn,
            heading:     Vec3::new(0.0, 0.0, 1.0),
            speed_mps:   0.0,
            destination: None,
            stop_m:      Self::DEFAULT_STOP_M,
        }
    }

    /// Override the arrival radius (metres).
    pub fn with_stopping_distance(mut self, stop_m: f32) -> Self {
        self.stop_m = stop_m.max(0.0);
        self
    }

    /// Unit direction the body is facing.
    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Integrate straight-line motion for `dt` seconds.
    ///
    /// Steps toward the destination at the commanded speed, never overshoots,
    /// and clears the path once inside the stopping threshold.  Destinations
    /// are taken as given; [`sample_reachable`][NavigationPort::sample_reachable]
    /// is the walkability filter.
    pub fn advance(&mut self, dt: f32) {
        let Some(dest) = self.destination else { return };

        let to_dest = dest - self.position;
        let dist = to_dest.length();
        if dist > f32::EPSILON {
            self.heading = to_dest * (1.0 / dist);
        }

        let step = self.speed_mps * dt.max(0.0);
        if step >= dist {
            self.position = dest;
        } else {
            self.position += self.heading * step;
        }

        if self.position.distance(dest) <= self.stop_m {
            self.destination = None;
        }
    }
}

impl NavigationPort for FieldNavigator {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn sample_reachable(&self, origin: Vec3, radius: f32) -> NavQueryResult {
        self.field.nearest_reachable(origin, radius)
    }

    fn move_to(&mut self, destination: Vec3, speed_mps: f32) {
        let dir = (destination - self.position).normalized_or_zero();
        if dir != Vec3::ZERO {
            self.heading = dir;
        }
        self.speed_mps = speed_mps.max(0.0);
        self.destination = Some(destination);
    }

    fn remaining_distance(&self) -> f32 {
        self.destination
            .map(|d| self.position.distance(d))
            .unwrap_or(0.0)
    }

    fn stopping_threshold(&self) -> f32 {
        self.stop_m
    }

    fn has_pending_path(&self) -> bool {
        self.destination.is_some()
    }

    fn cancel_path(&mut self) {
        self.destination = None;
    }
}
