//! Fleet observer trait for progress reporting and data collection.

use cw_core::SimClock;
use cw_vehicle::Vehicle;

/// Callbacks invoked by [`Fleet::run_ticks`][crate::Fleet::run_ticks] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u64 }
///
/// impl FleetObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, clock: &SimClock, active: usize, waiting: usize) {
///         if clock.tick % self.every == 0 {
///             println!("{clock}: {active} active, {waiting} waiting");
///         }
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _clock: &SimClock) {}

    /// Called at the end of each tick with the live and waiting counts.
    fn on_tick_end(&mut self, _clock: &SimClock, _active: usize, _waiting: usize) {}

    /// Called at snapshot intervals (every `settings.snapshot_interval_ticks`
    /// ticks) with read-only access to the full vehicle set, so output
    /// writers can record positions without the fleet knowing about any
    /// specific format.
    fn on_snapshot(&mut self, _clock: &SimClock, _vehicles: &[Vehicle]) {}

    /// Called once by the embedding after its final tick.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`FleetObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want callbacks.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
