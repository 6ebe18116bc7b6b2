//! Unit tests for cw-output.

use std::fs;

use cw_core::{ColorTag, Lane, SimClock, SimSettings, TurnType, VehicleId};
use cw_geometry::IntersectionLayout;
use cw_sim::FleetObserver;
use cw_vehicle::Vehicle;

use crate::writer::OutputWriter;
use crate::{CsvWriter, SimOutputObserver, TickSummaryRow, VehicleSnapshotRow};

fn snapshot_row(id: u64, tick: u64) -> VehicleSnapshotRow {
    VehicleSnapshotRow {
        vehicle_id: id,
        tick,
        x: 410.0,
        y: 123.456,
        heading: 1.5708,
        state: "approaching",
        origin: "north",
        lane: 1,
    }
}

#[test]
fn csv_writer_creates_both_files_with_headers() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = CsvWriter::new(dir.path()).unwrap();
    w.finish().unwrap();

    let snaps = fs::read_to_string(dir.path().join("vehicle_snapshots.csv")).unwrap();
    assert!(snaps.starts_with("vehicle_id,tick,x,y,heading,state,origin,lane"));

    let sums = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert!(sums.starts_with("tick,sim_secs,active,waiting"));
}

#[test]
fn rows_round_trip_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = CsvWriter::new(dir.path()).unwrap();

    w.write_snapshots(&[snapshot_row(7, 30), snapshot_row(8, 30)]).unwrap();
    w.write_tick_summary(&TickSummaryRow { tick: 30, sim_secs: 1.0, active: 2, waiting: 1 })
        .unwrap();
    w.finish().unwrap();

    let snaps = fs::read_to_string(dir.path().join("vehicle_snapshots.csv")).unwrap();
    assert_eq!(snaps.lines().count(), 3);
    assert!(snaps.contains("7,30,410.000,123.456,1.5708,approaching,north,1"));

    let sums = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert!(sums.contains("30,1.000,2,1"));
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = CsvWriter::new(dir.path()).unwrap();
    w.finish().unwrap();
    w.finish().unwrap();
}

#[test]
fn observer_writes_through_fleet_callbacks() {
    let dir = tempfile::tempdir().unwrap();
    let writer = CsvWriter::new(dir.path()).unwrap();
    let mut obs = SimOutputObserver::new(writer);

    let layout = IntersectionLayout::new(SimSettings::default().bounds);
    let vehicles = vec![
        Vehicle::spawn(
            VehicleId(0),
            cw_core::Approach::West,
            Lane::RightTurn,
            TurnType::Right,
            ColorTag::Slate,
            &layout,
            40.0,
        ),
    ];

    let mut clock = SimClock::new();
    clock.advance(1.0 / 30.0);

    obs.on_tick_end(&clock, 1, 0);
    obs.on_snapshot(&clock, &vehicles);
    obs.on_sim_end(&clock);
    assert!(obs.take_error().is_none());

    let snaps = fs::read_to_string(dir.path().join("vehicle_snapshots.csv")).unwrap();
    assert_eq!(snaps.lines().count(), 2);
    assert!(snaps.contains("west"));
    assert!(snaps.contains("approaching"));

    let sums = fs::read_to_string(dir.path().join("tick_summaries.csv")).unwrap();
    assert_eq!(sums.lines().count(), 2);
}
