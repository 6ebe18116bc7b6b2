//! `cw-output` — simulation output writers for the crossway simulator.
//!
//! The CSV backend creates two files in the configured output directory:
//!
//! | File                    | Contents                                    |
//! |-------------------------|---------------------------------------------|
//! | `vehicle_snapshots.csv` | one row per vehicle per snapshot interval   |
//! | `tick_summaries.csv`    | one row per tick (active/waiting counts)    |
//!
//! The writer implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `cw_sim::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cw_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! fleet.run_ticks(n, dt, &mut signals, &mut obs);
//! obs.on_sim_end(fleet.clock());
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
