//! `cw-vehicle` — one vehicle's state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`state`]   | `DriveState` — the approach/wait/cross/exit lifecycle    |
//! | [`vehicle`] | `Vehicle` — pose, speed, progress, attached turn path    |
//! | [`follow`]  | `TrafficView` — read-only siblings view for gap checks   |
//! | [`update`]  | the per-tick state transition and kinematics step        |
//!
//! # Lifecycle
//!
//! ```text
//! Approaching → Waiting → Crossing → Exiting → Completed
//!       └──────────────────↑
//!        (footprint entry on a green approach skips Waiting)
//! ```
//!
//! No transition moves backward and none skips forward, with two deliberate
//! exceptions: a green-light approach enters `Crossing` directly, and a
//! vehicle stuck in `Waiting` past the escape timeout forces its way into
//! `Crossing` regardless of signal or leader state — the simulation's
//! liveness guarantee against a stale or absent controller.
//!
//! Failures degrade instead of propagating: a non-finite position heals back
//! to the spawn anchor, and a failed turn path falls back first to a straight
//! line and then to constant-rate kinematic turning.  Nothing in this crate
//! returns an error at tick time.

pub mod follow;
pub mod state;
pub mod update;
pub mod vehicle;


pub use follow::{SiblingSnapshot, TrafficView};
pub use state::DriveState;
pub use vehicle::{VEHICLE_LENGTH, Vehicle};
