//! The per-tick state machine step.

use cw_core::{LightColor, Pose, SceneBounds, TurnType};
use cw_geometry::IntersectionLayout;
use cw_trajectory::{PathSegment, Trajectory};

use crate::follow::TrafficView;
use crate::state::DriveState;
use crate::vehicle::Vehicle;

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Acceleration and braking rate while approaching, units/s².
const APPROACH_ACCEL: f64 = 30.0;
/// Start braking for a red light within this distance of the stop line.
const BRAKE_DISTANCE: f64 = 40.0;
/// A red light holds the vehicle once it is this close to the stop line.
const STOP_PROXIMITY: f64 = 15.0;
/// A leader closer than this blocks an approaching vehicle.
const FOLLOW_GAP: f64 = 25.0;
/// A waiting vehicle needs at least this much clear road to move off.
const RELEASE_GAP: f64 = 20.0;
/// Forced release from `Waiting` after this much accumulated hold time.
const WAIT_ESCAPE_SECS: f64 = 15.0;
/// Speed granted on the `Waiting` → `Crossing` transition.
const RESTART_SPEED: f64 = 10.0;
/// Acceleration while crossing, units/s².
const CROSS_ACCEL: f64 = 40.0;
/// Crossing speed cap as a multiple of the vehicle's max speed.
const CROSS_SPEED_FACTOR: f64 = 1.2;
/// Minimum time in `Crossing` before an exit can be flagged.
const MIN_CROSSING_SECS: f64 = 0.5;
/// A crossing vehicle that never touches the footprint (possible only on a
/// degraded fallback path) is released to `Exiting` after this long.
const CROSSING_COMMIT_SECS: f64 = 3.0;
/// A vehicle completes once this far beyond every scene edge.
const EXIT_MARGIN: f64 = 100.0;
/// Heading rate for the last-resort kinematic turn, rad/s.
const FALLBACK_TURN_RATE: f64 = 1.2;
/// Heading lookahead along the turn path: `max(2, speed × 0.1)` units.
const LOOKAHEAD_MIN: f64 = 2.0;
const LOOKAHEAD_SPEED_FACTOR: f64 = 0.1;

impl Vehicle {
    /// Advance this vehicle by `dt` seconds.
    ///
    /// `light` is the signal facing this vehicle's approach (`None` is
    /// permissive), `traffic` the tick's read-only sibling snapshot.  Never
    /// fails: every anomaly degrades to a defined pose and state.
    pub fn update(
        &mut self,
        dt:      f64,
        light:   Option<LightColor>,
        traffic: &TrafficView<'_>,
        layout:  &IntersectionLayout,
        bounds:  SceneBounds,
    ) {
        if !self.pose.is_finite() {
            self.heal(layout);
            return;
        }
        if dt <= 0.0 {
            return;
        }

        match self.state {
            DriveState::Approaching => self.tick_approaching(dt, light, traffic, layout),
            DriveState::Waiting     => self.tick_waiting(dt, light, traffic, layout),
            DriveState::Crossing    => self.tick_crossing(dt, layout),
            DriveState::Exiting     => self.tick_exiting(dt, bounds),
            DriveState::Completed   => {}
        }
    }

    // ── Approaching ───────────────────────────────────────────────────────

    fn tick_approaching(
        &mut self,
        dt:      f64,
        light:   Option<LightColor>,
        traffic: &TrafficView<'_>,
        layout:  &IntersectionLayout,
    ) {
        let stop_gap = layout.distance_to_stop(self.approach, self.pose.position);
        let red = matches!(light, Some(LightColor::Red));
        let leader_gap = traffic.leader_gap(self.id, self.approach, self.lane, self.pose.position);
        let blocked = leader_gap.is_some_and(|g| g < FOLLOW_GAP);

        let braking = blocked || (red && stop_gap >= 0.0 && stop_gap < BRAKE_DISTANCE);
        if braking {
            self.speed = (self.speed - APPROACH_ACCEL * dt).max(0.0);
        } else {
            self.speed = (self.speed + APPROACH_ACCEL * dt).min(self.max_speed);
        }
        self.pose = self.pose.advanced(self.speed * dt);

        if layout.contains(self.pose.position) {
            // Green-light approaches roll straight into the crossing without
            // ever holding at the line.
            self.enter_crossing(layout);
            return;
        }
        // Only the vehicle at the line holds in `Waiting`; queued followers
        // further back hold at zero speed in `Approaching` until the lane
        // compacts.
        let at_line = stop_gap <= STOP_PROXIMITY;
        if at_line && (red || blocked) {
            self.state = DriveState::Waiting;
            self.speed = 0.0;
            self.wait_secs = 0.0;
        }
    }

    // ── Waiting ───────────────────────────────────────────────────────────

    fn tick_waiting(
        &mut self,
        dt:      f64,
        light:   Option<LightColor>,
        traffic: &TrafficView<'_>,
        layout:  &IntersectionLayout,
    ) {
        self.speed = 0.0;
        self.wait_secs += dt;

        let light_permits = light.is_none_or(LightColor::permits_entry);
        let road_clear = traffic
            .leader_gap(self.id, self.approach, self.lane, self.pose.position)
            .is_none_or(|g| g > RELEASE_GAP);

        // The timeout escape ignores both the light and the leader: a stale
        // controller or a wedged queue must never hold a vehicle forever.
        if self.wait_secs > WAIT_ESCAPE_SECS || (light_permits && road_clear) {
            self.speed = RESTART_SPEED;
            self.enter_crossing(layout);
        }
    }

    // ── Crossing ──────────────────────────────────────────────────────────

    fn enter_crossing(&mut self, layout: &IntersectionLayout) {
        self.state = DriveState::Crossing;
        self.crossing_secs = 0.0;
        self.progress = 0.0;
        self.entered_footprint = layout.contains(self.pose.position);
    }

    /// Whether the vehicle is close enough to the crossing box to anchor a
    /// turn path at its current position.  Vehicles released from deep in a
    /// queue roll forward until they are, so turns always start at the
    /// intersection rather than mid-road.
    fn near_crossing(&self, layout: &IntersectionLayout) -> bool {
        layout.contains(self.pose.position)
            || layout.distance_to_stop(self.approach, self.pose.position) <= STOP_PROXIMITY
    }

    /// Attach the compiled turn path, degrading through the fallback ladder
    /// if construction misbehaves.
    fn build_turn_path(&mut self, layout: &IntersectionLayout) {
        let segments = layout.turn_segments(self.approach, self.turn);
        let start = Pose::new(self.pose.position, layout.initial_heading(self.approach));
        match Trajectory::from_segments(start, &segments) {
            Ok(path) if path.end().is_finite() => self.path = Some(path),
            _ => self.build_fallback_path(layout),
        }
    }

    /// Straight line from the current position to the exit point; if even
    /// that cannot be built, fall through to kinematic turning.
    fn build_fallback_path(&mut self, layout: &IntersectionLayout) {
        let target = layout.exit_point(self.approach, self.turn);
        let span = self.pose.position.distance(target);
        let heading = (target - self.pose.position).heading();
        let start = Pose::new(self.pose.position, heading);
        match Trajectory::from_segments(start, &[PathSegment::straight(span.max(1.0))]) {
            Ok(path) if path.end().is_finite() => self.path = Some(path),
            _ => {
                self.path = None;
                self.kinematic_fallback = true;
            }
        }
    }

    fn tick_crossing(&mut self, dt: f64, layout: &IntersectionLayout) {
        self.crossing_secs += dt;
        let target = self.max_speed * CROSS_SPEED_FACTOR;
        self.speed = (self.speed + CROSS_ACCEL * dt).min(target);

        if self.turn == TurnType::Straight {
            self.pose = self.pose.advanced(self.speed * dt);
        } else {
            if self.path.is_none() && !self.kinematic_fallback && self.near_crossing(layout) {
                self.build_turn_path(layout);
            }
            if self.kinematic_fallback {
                // Constant-rate turn toward the destination heading.
                let rate = FALLBACK_TURN_RATE.copysign(self.turn.heading_delta());
                self.pose.heading += rate * dt;
                self.pose = self.pose.advanced(self.speed * dt);
            } else if let Some(path) = self.path.as_ref() {
                self.progress += self.speed * dt;
                let lookahead = (self.speed * LOOKAHEAD_SPEED_FACTOR).max(LOOKAHEAD_MIN);
                let position = path.position_at(self.progress);
                let ahead = path.position_at(self.progress + lookahead);
                if !position.is_finite() {
                    // Sampling went bad mid-turn: drop to the fallback
                    // ladder and move again next tick.
                    self.path = None;
                    self.build_fallback_path(layout);
                    return;
                }
                let dir = ahead - position;
                if dir.is_finite() && dir.length() > 1e-9 {
                    self.pose.heading = dir.heading();
                }
                self.pose.position = position;
            } else {
                // Not yet near the box: roll forward until the turn can be
                // anchored there.
                self.pose = self.pose.advanced(self.speed * dt);
            }
        }

        if layout.contains(self.pose.position) {
            self.entered_footprint = true;
        } else if self.crossing_secs > MIN_CROSSING_SECS
            && (self.entered_footprint || self.crossing_secs > CROSSING_COMMIT_SECS)
        {
            // The time guard stops a tight turn from re-flagging exit on the
            // tick it starts; the footprint latch stops a vehicle released
            // at the stop line (still short of the box) from exiting before
            // it ever crossed.
            self.state = DriveState::Exiting;
            self.path = None;
        }
    }

    // ── Exiting ───────────────────────────────────────────────────────────

    fn tick_exiting(&mut self, dt: f64, bounds: SceneBounds) {
        self.speed = self.max_speed;
        self.pose = self.pose.advanced(self.speed * dt);
        if bounds.beyond_margin(self.pose.position, EXIT_MARGIN) {
            self.state = DriveState::Completed;
            self.speed = 0.0;
        }
    }
}
