//! Trajectory construction and arc-length sampling.

use cw_core::{Pose, Vec2};

use crate::error::{TrajectoryError, TrajectoryResult};
use crate::segment::{CURVATURE_EPSILON, PathSegment, STRAIGHT_RADIUS};

/// Precomputed state at one segment boundary.
///
/// `center` is the arc center of the segment *starting* here.  Straight
/// segments store a degenerate center at [`STRAIGHT_RADIUS`] instead of an
/// absent one, which keeps the sampling arithmetic branch-uniform; the
/// straight/curved decision is made from the recomputed per-segment
/// curvature, never from the center itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StitchPoint {
    /// Cumulative arc-length from the trajectory start.
    pub arc_len: f64,
    /// Heading at this boundary, radians.
    pub heading: f64,
    /// Position at this boundary.
    pub position: Vec2,
    /// Center of the arc leaving this boundary (degenerate when straight).
    pub center: Vec2,
}

/// An immutable piecewise-arc path, sampled by arc-length.
///
/// Invariants: at least two stitching points (`segment_count + 1` for
/// `segment_count` input segments) and strictly increasing `arc_len` across
/// them, except where a zero-length input segment produces a repeated
/// boundary (sampling skips those spans).  Construction is a pure function
/// of its inputs; specs are cheap to clone and safe to cache by value.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<StitchPoint>,
}

impl Trajectory {
    /// Build a trajectory from `start` through `segments` in order.
    ///
    /// # Errors
    ///
    /// [`TrajectoryError::Empty`] for an empty segment list,
    /// [`TrajectoryError::NonFinite`] if the start pose or any segment holds
    /// a NaN or infinity.  Zero-length segments are accepted and produce a
    /// repeated stitching point.
    pub fn from_segments(start: Pose, segments: &[PathSegment]) -> TrajectoryResult<Self> {
        if segments.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        if !start.is_finite() || segments.iter().any(|s| !s.is_finite()) {
            return Err(TrajectoryError::NonFinite);
        }

        let mut points = Vec::with_capacity(segments.len() + 1);
        let mut arc_len = 0.0;
        let mut heading = start.heading;
        let mut position = start.position;

        points.push(StitchPoint {
            arc_len,
            heading,
            position,
            center: arc_center(position, heading, segments[0].curvature),
        });

        for (i, seg) in segments.iter().enumerate() {
            let next_heading = heading + seg.curvature * seg.length;

            if seg.is_straight() {
                position = position + Vec2::from_heading(heading) * seg.length;
            } else {
                // Rotate the radius vector 90° left of the heading to find
                // the center, then evaluate the circle at the new heading —
                // geometrically exact arc endpoints.
                let r = 1.0 / seg.curvature;
                let center = position + Vec2::from_heading(heading).perp_left() * r;
                position = center + Vec2::new(next_heading.sin(), -next_heading.cos()) * r;
            }
            heading = next_heading;
            arc_len += seg.length;

            // The outgoing curvature of this boundary: the next segment's if
            // one exists, otherwise replay the final segment's (used only by
            // past-the-end extrapolation).
            let outgoing = segments.get(i + 1).unwrap_or(seg).curvature;
            points.push(StitchPoint {
                arc_len,
                heading,
                position,
                center: arc_center(position, heading, outgoing),
            });
        }

        Ok(Self { points })
    }

    /// Total arc-length of the path.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.points[self.points.len() - 1].arc_len
    }

    /// Position of the first stitching point.
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.points[0].position
    }

    /// Position of the last stitching point.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.points[self.points.len() - 1].position
    }

    /// Heading at the last stitching point.
    #[inline]
    pub fn end_heading(&self) -> f64 {
        self.points[self.points.len() - 1].heading
    }

    /// The stitching points, in increasing arc-length order.
    #[inline]
    pub fn points(&self) -> &[StitchPoint] {
        &self.points
    }

    /// Position at `arc_len` along the path.
    ///
    /// Negative inputs clamp to the start.  Inputs past the total length
    /// extrapolate along the final segment's curvature, matching the
    /// construction formula, so a vehicle that overruns its path keeps a
    /// well-defined position.  Never NaN for a finitely-built trajectory and
    /// finite input.
    pub fn position_at(&self, arc_len: f64) -> Vec2 {
        let (from, to) = self.bracket(arc_len);
        let span = to.arc_len - from.arc_len;
        if span <= 0.0 {
            return from.position;
        }

        let s = arc_len.max(0.0) - from.arc_len;
        // Recompute the segment curvature from its boundary headings so the
        // straight/curved branch here mirrors construction exactly.
        let curvature = (to.heading - from.heading) / span;
        if curvature.abs() < CURVATURE_EPSILON {
            from.position + Vec2::from_heading(from.heading) * s
        } else {
            let r = 1.0 / curvature;
            let theta = from.heading + curvature * s;
            from.center + Vec2::new(theta.sin(), -theta.cos()) * r
        }
    }

    /// Heading at `arc_len`, with the same clamping and extrapolation rules
    /// as [`position_at`](Self::position_at).
    pub fn heading_at(&self, arc_len: f64) -> f64 {
        let (from, to) = self.bracket(arc_len);
        let span = to.arc_len - from.arc_len;
        if span <= 0.0 {
            return from.heading;
        }
        let s = arc_len.max(0.0) - from.arc_len;
        let curvature = (to.heading - from.heading) / span;
        from.heading + curvature * s
    }

    /// The stitching-point pair bracketing `arc_len`.
    ///
    /// Linear scan in increasing order; clamps to the final segment when
    /// `arc_len` exceeds the total length.
    fn bracket(&self, arc_len: f64) -> (&StitchPoint, &StitchPoint) {
        let last = self.points.len() - 1;
        let mut i = 0;
        while i + 1 < last && self.points[i + 1].arc_len <= arc_len {
            i += 1;
        }
        (&self.points[i], &self.points[i + 1])
    }
}

/// Center of the arc leaving `(position, heading)` at `curvature`, with the
/// radius clamped to [`STRAIGHT_RADIUS`] below the straight threshold.
fn arc_center(position: Vec2, heading: f64, curvature: f64) -> Vec2 {
    let r = if curvature.abs() < CURVATURE_EPSILON {
        STRAIGHT_RADIUS.copysign(if curvature < 0.0 { -1.0 } else { 1.0 })
    } else {
        1.0 / curvature
    };
    position + Vec2::from_heading(heading).perp_left() * r
}
