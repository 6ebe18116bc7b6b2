//! `SimOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use cw_core::{Approach, SimClock};
use cw_sim::FleetObserver;
use cw_vehicle::Vehicle;

use crate::OutputError;
use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;

/// A [`FleetObserver`] that writes vehicle snapshots and tick summaries to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, clock: &SimClock, active: usize, waiting: usize) {
        let row = TickSummaryRow {
            tick:     clock.tick,
            sim_secs: clock.elapsed_secs,
            active:   active as u64,
            waiting:  waiting as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, clock: &SimClock, vehicles: &[Vehicle]) {
        let rows: Vec<VehicleSnapshotRow> = vehicles
            .iter()
            .map(|v| VehicleSnapshotRow {
                vehicle_id: v.id.0,
                tick:       clock.tick,
                x:          v.pose.position.x,
                y:          v.pose.position.y,
                heading:    v.pose.heading,
                state:      v.state.as_str(),
                origin:     origin_tag(v.approach),
                lane:       v.lane.index() as u8,
            })
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

fn origin_tag(approach: Approach) -> &'static str {
    match approach {
        Approach::North => "north",
        Approach::East  => "east",
        Approach::South => "south",
        Approach::West  => "west",
    }
}
