//! Read-only siblings view for car-following checks.
//!
//! The coordinator snapshots every vehicle's identity and position at the
//! start of a tick and passes the snapshot into each update call.  Followers
//! therefore always measure against last-tick positions — acceptable
//! one-tick staleness in a discrete-time simulation — and no vehicle ever
//! holds a reference back into the fleet.

use cw_core::{Approach, Lane, Vec2, VehicleId};

use crate::vehicle::VEHICLE_LENGTH;

/// One row of the per-tick position snapshot.
#[derive(Copy, Clone, Debug)]
pub struct SiblingSnapshot {
    pub id:       VehicleId,
    pub approach: Approach,
    pub lane:     Lane,
    pub position: Vec2,
}

/// Borrowed view over the tick's sibling snapshot.
#[derive(Copy, Clone)]
pub struct TrafficView<'a> {
    siblings: &'a [SiblingSnapshot],
}

impl<'a> TrafficView<'a> {
    pub fn new(siblings: &'a [SiblingSnapshot]) -> Self {
        Self { siblings }
    }

    /// An empty view — no siblings, every gap check passes.
    pub fn empty() -> TrafficView<'static> {
        TrafficView { siblings: &[] }
    }

    /// Gap to the nearest vehicle strictly ahead in the same approach and
    /// lane, or `None` when the lane ahead is clear.
    ///
    /// "Ahead" is a coordinate comparison along the approach's travel
    /// direction; the gap is leading-edge to trailing-edge, so it can go
    /// negative if two bodies overlap.  Single-file spacing only — there is
    /// no lane changing in this model.
    pub fn leader_gap(
        &self,
        id:       VehicleId,
        approach: Approach,
        lane:     Lane,
        position: Vec2,
    ) -> Option<f64> {
        let dir = approach.direction();
        let own = position.dot(dir);

        self.siblings
            .iter()
            .filter(|s| s.id != id && s.approach == approach && s.lane == lane)
            .map(|s| s.position.dot(dir) - own)
            .filter(|&ahead| ahead > 0.0)
            .map(|ahead| ahead - VEHICLE_LENGTH)
            .min_by(f64::total_cmp)
    }
}
