//! Strongly typed vehicle identifier.

use std::fmt;

/// Identity of one vehicle, assigned by the fleet coordinator at spawn.
///
/// Ids increase monotonically for the lifetime of a simulation and are never
/// reused; `u64` makes wrap-around a non-concern at any plausible spawn rate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u64);

impl VehicleId {
    /// The id that follows this one.
    #[inline]
    pub fn next(self) -> VehicleId {
        VehicleId(self.0 + 1)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}
