//! Read-only vehicle rows for renderers and other external consumers.

use cw_core::{ColorTag, Vec2, VehicleId};
use cw_vehicle::{DriveState, Vehicle};

/// Everything a renderer needs to draw one vehicle, copied out of the live
/// entity so consumers never hold references into the fleet.
#[derive(Copy, Clone, Debug)]
pub struct VehicleSnapshot {
    pub id:       VehicleId,
    pub position: Vec2,
    pub heading:  f64,
    pub color:    ColorTag,
    pub state:    DriveState,
}

impl VehicleSnapshot {
    pub fn of(vehicle: &Vehicle) -> Self {
        Self {
            id:       vehicle.id,
            position: vehicle.pose.position,
            heading:  vehicle.pose.heading,
            color:    vehicle.color,
            state:    vehicle.state,
        }
    }
}
