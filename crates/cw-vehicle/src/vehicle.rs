//! The vehicle entity.

use cw_core::{Approach, ColorTag, Lane, Pose, TurnType, VehicleId};
use cw_geometry::IntersectionLayout;
use cw_trajectory::Trajectory;

use crate::state::DriveState;

/// Body length used by the following-distance gap, scene units.
pub const VEHICLE_LENGTH: f64 = 8.0;

/// One vehicle in the simulation.
///
/// Owned and exclusively mutated by the fleet coordinator's per-tick update;
/// everything other vehicles see of it goes through the read-only
/// [`TrafficView`][crate::TrafficView] snapshot.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id:          VehicleId,
    /// Side the vehicle entered the scene from.
    pub approach:    Approach,
    /// Side it will leave through, fixed at spawn by the turn type.
    pub destination: Approach,
    pub lane:        Lane,
    pub turn:        TurnType,
    pub color:       ColorTag,

    pub pose:      Pose,
    /// Scene units per second, along `pose.heading`.
    pub speed:     f64,
    pub max_speed: f64,

    pub state: DriveState,

    /// Seconds accumulated in `Waiting` since the hold began.
    pub wait_secs: f64,

    /// Seconds since entering `Crossing`; guards against flagging an exit on
    /// the same tick a tight turn begins.
    pub(crate) crossing_secs: f64,

    /// Arc-length travelled along the attached turn path.
    pub(crate) progress: f64,

    /// Latched once the vehicle has actually been inside the crossing box;
    /// part of the exit-flagging guard.
    pub(crate) entered_footprint: bool,

    /// Turn path, built on first entry to `Crossing`.  Straight-through
    /// vehicles never carry one; they move by heading-projected translation.
    pub(crate) path: Option<Trajectory>,

    /// Last-resort motion mode: constant-rate heading change instead of
    /// trajectory sampling, used only if even the straight-line fallback
    /// path could not be built.
    pub(crate) kinematic_fallback: bool,
}

impl Vehicle {
    /// Create a vehicle at its lane's spawn anchor, at rest, facing inbound.
    pub fn spawn(
        id:        VehicleId,
        approach:  Approach,
        lane:      Lane,
        turn:      TurnType,
        color:     ColorTag,
        layout:    &IntersectionLayout,
        max_speed: f64,
    ) -> Self {
        let position = layout.spawn_point(approach, lane);
        Self {
            id,
            approach,
            destination: approach.destination(turn),
            lane,
            turn,
            color,
            pose: Pose::new(position, layout.initial_heading(approach)),
            speed: 0.0,
            max_speed,
            state: DriveState::Approaching,
            wait_secs: 0.0,
            crossing_secs: 0.0,
            progress: 0.0,
            entered_footprint: false,
            path: None,
            kinematic_fallback: false,
        }
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.state == DriveState::Waiting
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state.is_terminal()
    }

    /// Reset to the spawn anchor in `Approaching` at zero speed.
    ///
    /// The self-healing path for a vehicle whose position went non-finite:
    /// better a visibly respawned car than an undefined pose propagating
    /// through the following-distance checks.
    pub(crate) fn heal(&mut self, layout: &IntersectionLayout) {
        self.pose = Pose::new(
            layout.spawn_point(self.approach, self.lane),
            layout.initial_heading(self.approach),
        );
        self.speed = 0.0;
        self.state = DriveState::Approaching;
        self.wait_secs = 0.0;
        self.crossing_secs = 0.0;
        self.progress = 0.0;
        self.entered_footprint = false;
        self.path = None;
        self.kinematic_fallback = false;
    }
}
