//! One piece of a piecewise-arc path.

/// Curvatures below this magnitude are treated as straight.
pub const CURVATURE_EPSILON: f64 = 1e-6;

/// Radius substituted for straight segments so the stored-center arithmetic
/// stays uniform with the curved branch (no division by zero, no null
/// centers).
pub const STRAIGHT_RADIUS: f64 = 1e6;

/// A single path piece: travel `length` units while turning at `curvature`
/// radians per unit of arc.
///
/// Curvature is the signed reciprocal of the turn radius; positive curves
/// toward the traveller's left (counter-clockwise), zero is straight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathSegment {
    pub length:    f64,
    pub curvature: f64,
}

impl PathSegment {
    /// A straight piece of the given length.
    #[inline]
    pub fn straight(length: f64) -> Self {
        Self { length, curvature: 0.0 }
    }

    /// A circular arc of the given radius sweeping `sweep` radians
    /// (positive = left / counter-clockwise).
    #[inline]
    pub fn arc(radius: f64, sweep: f64) -> Self {
        Self {
            length:    radius * sweep.abs(),
            curvature: sweep.signum() / radius,
        }
    }

    /// Whether the curvature is below the straight-line threshold.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.curvature.abs() < CURVATURE_EPSILON
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.length.is_finite() && self.curvature.is_finite()
    }
}
