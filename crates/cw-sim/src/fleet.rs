//! The `Fleet` coordinator: spawning, advancement, and reaping.

use cw_core::{
    Approach, ColorTag, Lane, LightMap, SimClock, SimRng, SimSettings, TurnType, VehicleId,
};
use cw_geometry::IntersectionLayout;
use cw_vehicle::{DriveState, SiblingSnapshot, TrafficView, Vehicle};

use crate::observer::FleetObserver;
use crate::signal::SignalSource;
use crate::snapshot::VehicleSnapshot;

/// Two vehicles in the same approach and lane are never spawned closer than
/// this, scene units.
pub const MIN_SPAWN_SPACING: f64 = 60.0;

/// Probability that an inner-lane vehicle goes straight (the rest turn left).
const STRAIGHT_WEIGHT: f64 = 0.7;

/// Owns the active vehicle set and drives it one tick at a time.
///
/// Construct via [`FleetBuilder`][crate::FleetBuilder].
pub struct Fleet {
    settings: SimSettings,
    layout:   IntersectionLayout,
    clock:    SimClock,
    rng:      SimRng,

    pub(crate) vehicles: Vec<Vehicle>,

    /// Milliseconds accumulated toward the next spawn attempt.
    spawn_timer_ms: f64,
    pub(crate) next_id:        VehicleId,
    spawned_total:  u64,
}

impl Fleet {
    pub(crate) fn new(settings: SimSettings, layout: IntersectionLayout, rng: SimRng) -> Self {
        Self {
            settings,
            layout,
            clock: SimClock::new(),
            rng,
            vehicles: Vec::new(),
            spawn_timer_ms: 0.0,
            next_id: VehicleId(0),
            spawned_total: 0,
        }
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the whole simulation by `dt_secs` with the given signal state.
    pub fn tick(&mut self, dt_secs: f64, lights: &LightMap) {
        if !(dt_secs > 0.0) || !dt_secs.is_finite() {
            return;
        }
        self.clock.advance(dt_secs);
        self.advance_spawner(dt_secs);

        // Snapshot positions first so every follower measures against
        // last-tick state, independent of update order within the tick.
        let siblings: Vec<SiblingSnapshot> = self
            .vehicles
            .iter()
            .map(|v| SiblingSnapshot {
                id:       v.id,
                approach: v.approach,
                lane:     v.lane,
                position: v.pose.position,
            })
            .collect();
        let view = TrafficView::new(&siblings);

        let layout = &self.layout;
        let bounds = self.settings.bounds;
        for v in &mut self.vehicles {
            v.update(dt_secs, lights.get(v.approach), &view, layout, bounds);
        }

        self.reap();
    }

    /// Run `n` uniform ticks, pulling lights from `signals` and reporting to
    /// `observer` at each boundary.  Useful for demos and tests; the normal
    /// embedding calls [`tick`](Self::tick) directly from its frame loop.
    pub fn run_ticks<S: SignalSource, O: FleetObserver>(
        &mut self,
        n:        u64,
        dt_secs:  f64,
        signals:  &mut S,
        observer: &mut O,
    ) {
        for _ in 0..n {
            observer.on_tick_start(&self.clock);
            let lights = signals.lights(self.clock.elapsed_secs);
            self.tick(dt_secs, &lights);
            observer.on_tick_end(&self.clock, self.vehicles.len(), self.waiting_total());

            let every = self.settings.snapshot_interval_ticks;
            if every > 0 && self.clock.tick.is_multiple_of(every) {
                observer.on_snapshot(&self.clock, &self.vehicles);
            }
        }
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    fn advance_spawner(&mut self, dt_secs: f64) {
        let rate = self.settings.spawn_rate_per_10s;
        if !(rate > 0.0) {
            return;
        }
        self.spawn_timer_ms += dt_secs * 1_000.0;
        let interval_ms = 10_000.0 / rate;
        if self.spawn_timer_ms > interval_ms {
            self.spawn_timer_ms = 0.0;
            self.try_spawn();
        }
    }

    /// One spawn attempt: random side and lane, rejected if the lane's spawn
    /// anchor is within [`MIN_SPAWN_SPACING`] of an existing vehicle in the
    /// same approach and lane.
    pub(crate) fn try_spawn(&mut self) -> Option<VehicleId> {
        let approach = *self.rng.choose(&Approach::ALL)?;
        let lane = *self.rng.choose(&Lane::ALL)?;

        let anchor = self.layout.spawn_point(approach, lane);
        let crowded = self.vehicles.iter().any(|v| {
            v.approach == approach
                && v.lane == lane
                && v.pose.position.distance(anchor) < MIN_SPAWN_SPACING
        });
        if crowded {
            return None;
        }

        let turn = match lane {
            Lane::RightTurn => TurnType::Right,
            Lane::Through => {
                if self.rng.gen_bool(STRAIGHT_WEIGHT) {
                    TurnType::Straight
                } else {
                    TurnType::Left
                }
            }
        };
        let color = *self.rng.choose(&ColorTag::ALL)?;

        let id = self.next_id;
        self.next_id = id.next();
        self.spawned_total += 1;
        self.vehicles.push(Vehicle::spawn(
            id,
            approach,
            lane,
            turn,
            color,
            &self.layout,
            self.settings.max_speed,
        ));
        Some(id)
    }

    // ── Reaping ───────────────────────────────────────────────────────────

    /// Remove vehicles that are `Completed` and verified outside the scene.
    ///
    /// A `Completed` vehicle still inside the bounds is reverted to
    /// `Exiting` instead of removed — deleting a car the renderer can still
    /// see would be visually wrong no matter how it got mis-tagged.
    fn reap(&mut self) {
        let bounds = self.settings.bounds;
        for v in &mut self.vehicles {
            if v.is_completed() && bounds.contains(v.pose.position) {
                v.state = DriveState::Exiting;
            }
        }
        self.vehicles.retain(|v| !v.is_completed());
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The live vehicles, in spawn order.
    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Read-only render rows for the current vehicle set.
    pub fn snapshots(&self) -> Vec<VehicleSnapshot> {
        self.vehicles.iter().map(VehicleSnapshot::of).collect()
    }

    /// Vehicles currently holding in `Waiting`, per approach (indexed by
    /// [`Approach::index`]).  Signal controllers use this for
    /// demand-actuated phasing.
    pub fn waiting_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for v in &self.vehicles {
            if v.is_waiting() {
                counts[v.approach.index()] += 1;
            }
        }
        counts
    }

    /// Waiting vehicles on one approach.
    pub fn waiting_count(&self, approach: Approach) -> usize {
        self.waiting_counts()[approach.index()]
    }

    /// Waiting vehicles across all approaches.
    pub fn waiting_total(&self) -> usize {
        self.waiting_counts().iter().sum()
    }

    /// Number of live vehicles.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Vehicles ever spawned; monotonically increasing, never wraps in any
    /// realistic run.
    #[inline]
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    #[inline]
    pub fn layout(&self) -> &IntersectionLayout {
        &self.layout
    }

    // ── Runtime settings ──────────────────────────────────────────────────

    /// Change the spawn rate for subsequent spawns.  Non-positive or
    /// non-finite values are ignored.
    pub fn set_spawn_rate(&mut self, per_10s: f64) {
        if per_10s > 0.0 && per_10s.is_finite() {
            self.settings.spawn_rate_per_10s = per_10s;
        }
    }

    /// Change the cruise speed cap for existing and future vehicles.
    /// Non-positive or non-finite values are ignored.
    pub fn set_max_speed(&mut self, max_speed: f64) {
        if max_speed > 0.0 && max_speed.is_finite() {
            self.settings.max_speed = max_speed;
            for v in &mut self.vehicles {
                v.max_speed = max_speed;
            }
        }
    }
}
