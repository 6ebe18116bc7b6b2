//! Intersection layout: lane anchors, stop lines, and the footprint.

use cw_core::{Approach, Lane, SceneBounds, TurnType, Vec2};

/// Width of one approach's inbound side (two lanes), scene units.
pub const APPROACH_WIDTH: f64 = 40.0;

/// How far before the footprint boundary the stop line sits.
pub const STOP_CLEARANCE: f64 = 10.0;

/// Axis-aligned rectangle, used for the intersection footprint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A stop line: the segment vehicles measure their approach against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StopLine {
    pub a: Vec2,
    pub b: Vec2,
}

impl StopLine {
    /// Midpoint of the line, on the inbound side's lane axis.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }
}

/// Pure geometric calculator for a four-way intersection centered in the
/// scene, with a two-lane inbound side per approach.
///
/// All methods are total over the `Approach` × `TurnType` × `Lane` domain;
/// the enum types make an out-of-domain lookup unrepresentable.
#[derive(Copy, Clone, Debug)]
pub struct IntersectionLayout {
    center: Vec2,
    bounds: SceneBounds,
    /// Half the full road width — also the width of one inbound side.
    half_width: f64,
}

impl IntersectionLayout {
    /// Layout for an intersection at the center of `bounds`.
    pub fn new(bounds: SceneBounds) -> Self {
        Self {
            center: bounds.center(),
            bounds,
            half_width: APPROACH_WIDTH,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn bounds(&self) -> SceneBounds {
        self.bounds
    }

    /// Width of one inbound side (both lanes together).
    #[inline]
    pub fn approach_width(&self) -> f64 {
        self.half_width
    }

    /// The physical crossing area: a square spanning the full road width,
    /// centered on the intersection.
    pub fn footprint(&self) -> Rect {
        let h = self.half_width;
        Rect {
            min: self.center - Vec2::new(h, h),
            max: self.center + Vec2::new(h, h),
        }
    }

    /// Whether `p` is inside the crossing area.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.footprint().contains(p)
    }

    /// The heading a vehicle faces when entering from `approach`.
    #[inline]
    pub fn initial_heading(&self, approach: Approach) -> f64 {
        approach.heading()
    }

    /// Unit vector from the road centerline toward `approach`'s inbound
    /// lanes (the traveller's right-hand side, rotated consistently for all
    /// four sides).
    #[inline]
    fn inbound_side(&self, approach: Approach) -> Vec2 {
        let d = approach.direction();
        Vec2::new(d.y, -d.x)
    }

    /// Point where `approach`'s turning lane meets the footprint boundary:
    /// on the boundary face, offset from the centerline by half the
    /// turn lane's width.
    pub fn entry_point(&self, approach: Approach) -> Vec2 {
        let face = self.center - approach.direction() * self.half_width;
        face + self.inbound_side(approach) * (self.half_width * Lane::RightTurn.offset_factor())
    }

    /// Destination-side lane center for the travel direction that results
    /// from `turn`.
    ///
    /// Direction-specific 12-way table over the enum pair.  Vehicles exit
    /// into the outbound half of the destination side — the lane matching
    /// their new travel direction, never the mirror of their origin lane:
    /// through traffic continues in the through-lane position, turning
    /// traffic lands in the lane its arc feeds.
    pub fn exit_point(&self, approach: Approach, turn: TurnType) -> Vec2 {
        let factor = match turn {
            TurnType::Straight => Lane::Through.offset_factor(),
            TurnType::Left | TurnType::Right => Lane::RightTurn.offset_factor(),
        };
        let dest = approach.destination(turn);
        // Boundary face of the destination side; outbound lanes sit on the
        // opposite lateral half from that side's own inbound lanes.
        let face = self.center - dest.direction() * self.half_width;
        face - self.inbound_side(dest) * (self.half_width * factor)
    }

    /// Stop line for `approach`: perpendicular to the travel direction,
    /// [`STOP_CLEARANCE`] before the footprint boundary, spanning the
    /// inbound side from centerline to road edge.
    pub fn stop_line(&self, approach: Approach) -> StopLine {
        let dir = approach.direction();
        let side = self.inbound_side(approach);
        let base = self.center - dir * (self.half_width + STOP_CLEARANCE);
        StopLine {
            a: base,
            b: base + side * self.half_width,
        }
    }

    /// Signed distance from `position` to `approach`'s stop line, measured
    /// along the travel direction.  Positive while the vehicle is before the
    /// line, negative once past it.
    pub fn distance_to_stop(&self, approach: Approach, position: Vec2) -> f64 {
        let dir = approach.direction();
        (self.stop_line(approach).center() - position).dot(dir)
    }

    /// Spawn anchor: on the canvas edge of `approach`'s side, laterally
    /// centered in `lane` so the two lanes never overlap.
    pub fn spawn_point(&self, approach: Approach, lane: Lane) -> Vec2 {
        let dir = approach.direction();
        let edge_distance = match approach {
            Approach::North => self.center.y,
            Approach::East  => self.bounds.width - self.center.x,
            Approach::South => self.bounds.height - self.center.y,
            Approach::West  => self.center.x,
        };
        let edge = self.center - dir * edge_distance;
        edge + self.inbound_side(approach) * (self.half_width * lane.offset_factor())
    }
}
