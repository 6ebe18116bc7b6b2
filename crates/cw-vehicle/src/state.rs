//! The vehicle lifecycle state tag.

use std::fmt;

/// Where a vehicle is in its trip through the intersection.
///
/// The enum is closed: every tick handles every variant exhaustively, so an
/// unhandled state cannot exist at runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DriveState {
    /// Rolling toward the stop line, speeding up or yielding.
    Approaching,
    /// Held at the stop line by a red light or a leader.
    Waiting,
    /// Inside (or committed to) the crossing, possibly on a turn path.
    Crossing,
    /// Past the intersection, running straight off the scene.
    Exiting,
    /// Terminal: inert and eligible for removal.
    Completed,
}

impl DriveState {
    /// Stable lowercase tag for output rows and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            DriveState::Approaching => "approaching",
            DriveState::Waiting     => "waiting",
            DriveState::Crossing    => "crossing",
            DriveState::Exiting     => "exiting",
            DriveState::Completed   => "completed",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, DriveState::Completed)
    }
}

impl fmt::Display for DriveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
