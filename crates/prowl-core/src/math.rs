//! World-space vector math.
//!
//! `Vec3` uses `f32` components.  Behavior-level geometry (radius checks,
//! wander offsets, straight-line steering) never needs more precision, and
//! `f32` keeps per-agent state compact when thousands of machines run side
//! by side.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A position or displacement in world space, single-precision.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to `other` in metres.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    /// Squared distance — cheaper than [`distance`][Self::distance] for
    /// radius comparisons against a squared threshold.
    #[inline]
    pub fn distance_squared(self, other: Vec3) -> f32 {
        (other - self).length_squared()
    }

    /// Unit-length copy, or `ZERO` when the vector is too short to carry a
    /// direction.
    pub fn normalized_or_zero(self) -> Vec3 {
        let len_sq = self.length_squared();
        if len_sq <= f32::EPSILON {
            Vec3::ZERO
        } else {
            self * (1.0 / len_sq.sqrt())
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
