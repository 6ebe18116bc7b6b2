//! Runtime-tunable simulation settings.

use crate::error::{CoreError, CoreResult};
use crate::scene::SceneBounds;

/// Top-level simulation configuration.
///
/// Validated once when the fleet is built; `spawn_rate_per_10s` and
/// `max_speed` may then be changed mid-run through the fleet's setters
/// without restarting the simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSettings {
    /// Vehicles spawned per 10 seconds of simulated time (spawn attempts —
    /// an attempt can be rejected by the minimum-spacing rule).
    pub spawn_rate_per_10s: f64,

    /// Cruise speed cap for newly spawned vehicles, scene units per second.
    pub max_speed: f64,

    /// Master RNG seed.  The same seed always produces the same spawn
    /// sequence and turn choices.
    pub seed: u64,

    /// Scene rectangle; also fixes the intersection center.
    pub bounds: SceneBounds,

    /// Emit an observer snapshot every N ticks.  `0` disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimSettings {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.spawn_rate_per_10s > 0.0) || !self.spawn_rate_per_10s.is_finite() {
            return Err(CoreError::Config(format!(
                "spawn rate must be positive and finite, got {}",
                self.spawn_rate_per_10s
            )));
        }
        if !(self.max_speed > 0.0) || !self.max_speed.is_finite() {
            return Err(CoreError::Config(format!(
                "max speed must be positive and finite, got {}",
                self.max_speed
            )));
        }
        if !(self.bounds.width > 0.0)
            || !(self.bounds.height > 0.0)
            || !self.bounds.width.is_finite()
            || !self.bounds.height.is_finite()
        {
            return Err(CoreError::Config(format!(
                "scene bounds must be positive and finite, got {} x {}",
                self.bounds.width, self.bounds.height
            )));
        }
        Ok(())
    }
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            spawn_rate_per_10s:      4.0,
            max_speed:               40.0,
            seed:                    42,
            bounds:                  SceneBounds::default(),
            snapshot_interval_ticks: 30,
        }
    }
}
