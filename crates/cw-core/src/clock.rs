//! Simulation time model.
//!
//! One external driver calls the fleet's `tick(dt, lights)` once per frame;
//! the clock just accumulates those frame deltas.  The tick counter is the
//! canonical ordering unit (exact, overflow-proof in `u64`); the elapsed
//! seconds are the kinematic time base that speeds and wait durations are
//! measured against.

use std::fmt;

/// Frame counter plus accumulated simulated seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Number of completed ticks.
    pub tick: u64,
    /// Simulated seconds elapsed since the run began.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame of `dt_secs` simulated seconds.
    #[inline]
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{} ({:.2}s)", self.tick, self.elapsed_secs)
    }
}
