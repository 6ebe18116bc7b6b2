//! Planar vector and pose types.
//!
//! The coordinate system is shared with the render surface: `x` grows to the
//! right and `y` grows downward.  Headings are in radians, `0` facing the
//! positive x-axis, increasing counter-clockwise in mathematical terms.  All
//! geometry in the workspace uses this one convention.
//!
//! `f64` throughout — the trajectory math integrates headings over arc
//! lengths, and double precision keeps the exact-arc endpoint formulas free
//! of visible drift over a vehicle's whole path.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2-D point or displacement in scene coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading`.
    #[inline]
    pub fn from_heading(heading: f64) -> Self {
        Self { x: heading.cos(), y: heading.sin() }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// This vector rotated 90° counter-clockwise (toward a traveller's left).
    #[inline]
    pub fn perp_left(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Heading of this vector; `0.0` for the zero vector.
    #[inline]
    pub fn heading(self) -> f64 {
        if self == Vec2::ZERO { 0.0 } else { self.y.atan2(self.x) }
    }

    /// `true` when both components are finite (not NaN or ±∞).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Pose ──────────────────────────────────────────────────────────────────────

/// A position plus a facing direction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec2,
    /// Radians; `0` faces +x.
    pub heading: f64,
}

impl Pose {
    #[inline]
    pub fn new(position: Vec2, heading: f64) -> Self {
        Self { position, heading }
    }

    /// The pose translated `distance` along its own heading.
    #[inline]
    pub fn advanced(self, distance: f64) -> Pose {
        Pose {
            position: self.position + Vec2::from_heading(self.heading) * distance,
            heading:  self.heading,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.position.is_finite() && self.heading.is_finite()
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

/// Normalize an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % std::f64::consts::TAU;
    if a > std::f64::consts::PI {
        a -= std::f64::consts::TAU;
    } else if a <= -std::f64::consts::PI {
        a += std::f64::consts::TAU;
    }
    a
}
