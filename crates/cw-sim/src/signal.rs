//! The narrow interface to the external signal controller.

use cw_core::LightMap;

/// Source of per-approach signal colors, polled once per tick.
///
/// The controller's phase logic lives outside this core; the fleet only ever
/// reads the resulting color map.  Implementations may key off the supplied
/// simulated time or keep their own state.
pub trait SignalSource {
    /// The light map in effect at `now_secs` of simulated time.
    fn lights(&mut self, now_secs: f64) -> LightMap;
}

/// A [`SignalSource`] with no lights at all — every approach is treated as
/// permitted.  The stand-in for tests and uncontrolled intersections.
pub struct PermissiveSignals;

impl SignalSource for PermissiveSignals {
    fn lights(&mut self, _now_secs: f64) -> LightMap {
        LightMap::permissive()
    }
}
