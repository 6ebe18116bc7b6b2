//! crossing — headless demo run of the crossway intersection simulator.
//!
//! Drives the fleet through a few simulated minutes under a fixed-cycle
//! signal controller (north-south and east-west phases with yellow
//! intervals), writes CSV output, and prints a summary table.  Swap the
//! signal source for a demand-actuated one using `Fleet::waiting_counts`
//! to experiment with adaptive phasing.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use cw_core::{Approach, LightColor, LightMap, SceneBounds, SimSettings};
use cw_output::{CsvWriter, SimOutputObserver};
use cw_sim::{FleetBuilder, FleetObserver, SignalSource};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const SIM_SECONDS:        f64 = 180.0;
const TICK_RATE_HZ:       f64 = 30.0;
const SPAWN_RATE_PER_10S: f64 = 6.0;
const MAX_SPEED:          f64 = 40.0;

const GREEN_SECS:     f64 = 12.0;
const YELLOW_SECS:    f64 = 3.0;
const ALL_RED_SECS:   f64 = 1.0;

// ── Fixed-cycle signal controller ─────────────────────────────────────────────

/// Two-phase controller: north-south green, then east-west green, with a
/// yellow interval and an all-red clearance between phases.
struct FixedCycleSignals;

impl FixedCycleSignals {
    const PHASE_SECS: f64 = GREEN_SECS + YELLOW_SECS + ALL_RED_SECS;
    const CYCLE_SECS: f64 = 2.0 * Self::PHASE_SECS;

    fn axis_color(offset: f64) -> LightColor {
        if offset < GREEN_SECS {
            LightColor::Green
        } else if offset < GREEN_SECS + YELLOW_SECS {
            LightColor::Yellow
        } else {
            LightColor::Red
        }
    }
}

impl SignalSource for FixedCycleSignals {
    fn lights(&mut self, now_secs: f64) -> LightMap {
        let t = now_secs % Self::CYCLE_SECS;
        let (ns, ew) = if t < Self::PHASE_SECS {
            (Self::axis_color(t), LightColor::Red)
        } else {
            (LightColor::Red, Self::axis_color(t - Self::PHASE_SECS))
        };

        let mut map = LightMap::permissive();
        map.set(Approach::North, ns);
        map.set(Approach::South, ns);
        map.set(Approach::East, ew);
        map.set(Approach::West, ew);
        map
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== crossing — crossway intersection simulator ===");
    println!(
        "Seed: {SEED}  |  {SIM_SECONDS:.0} s at {TICK_RATE_HZ:.0} Hz  |  spawn {SPAWN_RATE_PER_10S}/10 s"
    );
    println!();

    let settings = SimSettings {
        spawn_rate_per_10s: SPAWN_RATE_PER_10S,
        max_speed: MAX_SPEED,
        seed: SEED,
        bounds: SceneBounds::new(800.0, 800.0),
        snapshot_interval_ticks: 30,
    };

    let mut fleet = FleetBuilder::new(settings).build()?;
    let mut signals = FixedCycleSignals;

    std::fs::create_dir_all("output/crossing")?;
    let writer = CsvWriter::new(Path::new("output/crossing"))?;
    let mut obs = SimOutputObserver::new(writer);

    let dt = 1.0 / TICK_RATE_HZ;
    let ticks = (SIM_SECONDS * TICK_RATE_HZ) as u64;

    let t0 = Instant::now();
    fleet.run_ticks(ticks, dt, &mut signals, &mut obs);
    obs.on_sim_end(fleet.clock());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // ── Summary ───────────────────────────────────────────────────────────

    println!("Simulation complete in {:.3} s wall-clock", elapsed.as_secs_f64());
    println!(
        "  spawned {} vehicles, {} still active at {}",
        fleet.spawned_total(),
        fleet.active_count(),
        fleet.clock(),
    );
    let waiting = fleet.waiting_counts();
    println!(
        "  waiting now: north {}, east {}, south {}, west {}",
        waiting[0], waiting[1], waiting[2], waiting[3]
    );
    println!();

    println!("{:<8} {:<8} {:<10} {:<12} {:<20}", "Vehicle", "Origin", "Turn", "State", "Position");
    println!("{}", "-".repeat(60));
    for v in fleet.vehicles() {
        println!(
            "{:<8} {:<8} {:<10} {:<12} {:<20}",
            v.id.0,
            v.approach.to_string(),
            v.turn.to_string(),
            v.state.to_string(),
            v.pose.position.to_string(),
        );
    }

    Ok(())
}
