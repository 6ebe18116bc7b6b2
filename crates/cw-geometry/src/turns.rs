//! Turn-path compilation: `{approach, turn}` → `(length, curvature)` list.
//!
//! The lead-in lengths and arc radii are domain constants that define how
//! sharp each maneuver looks; they are not derived from the layout.  Left
//! turns are tighter than right turns.

use std::f64::consts::FRAC_PI_2;

use cw_core::{Approach, TurnType};
use cw_trajectory::PathSegment;

use crate::layout::IntersectionLayout;

/// Straight run before and after the left-turn arc.
pub const LEFT_LEAD_IN: f64 = 12.0;
/// Left-turn arc radius.
pub const LEFT_TURN_RADIUS: f64 = 14.0;
/// Straight run before and after the right-turn arc.
pub const RIGHT_LEAD_IN: f64 = 16.0;
/// Right-turn arc radius.
pub const RIGHT_TURN_RADIUS: f64 = 18.0;

impl IntersectionLayout {
    /// Segment list for the trajectory engine.
    ///
    /// Straight passes are a single zero-curvature segment spanning the
    /// entry→exit distance; turns are a quarter-circle arc between two
    /// straight lead-ins (positive curvature for left, negative for right).
    pub fn turn_segments(&self, approach: Approach, turn: TurnType) -> Vec<PathSegment> {
        match turn {
            TurnType::Straight => {
                let span = self
                    .entry_point(approach)
                    .distance(self.exit_point(approach, turn));
                vec![PathSegment::straight(span)]
            }
            TurnType::Left => vec![
                PathSegment::straight(LEFT_LEAD_IN),
                PathSegment::arc(LEFT_TURN_RADIUS, FRAC_PI_2),
                PathSegment::straight(LEFT_LEAD_IN),
            ],
            TurnType::Right => vec![
                PathSegment::straight(RIGHT_LEAD_IN),
                PathSegment::arc(RIGHT_TURN_RADIUS, -FRAC_PI_2),
                PathSegment::straight(RIGHT_LEAD_IN),
            ],
        }
    }
}
