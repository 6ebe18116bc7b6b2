//! `cw-sim` — tick loop coordinator for the crossway simulator.
//!
//! # Tick phases
//!
//! ```text
//! fleet.tick(dt, lights):
//!   ① Spawn   — accumulate the spawn timer; over threshold, attempt one
//!               spawn (random side + lane, rejected under minimum spacing).
//!   ② Snapshot— record every vehicle's identity and position; followers
//!               measure against these last-tick values.
//!   ③ Advance — run every vehicle's state machine with the current lights.
//!   ④ Reap    — drop Completed vehicles verified outside the scene;
//!               revert any Completed-but-inside vehicle to Exiting.
//! ```
//!
//! Single-threaded and cooperative: one external driver calls `tick` once
//! per frame; nothing suspends, blocks, or runs in the background.  The only
//! shared mutable state is the vehicle list, owned here, and each vehicle's
//! own fields, mutated only by its own update call.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`fleet`]    | `Fleet` — the coordinator                               |
//! | [`builder`]  | `FleetBuilder` — validated construction, RNG injection  |
//! | [`observer`] | `FleetObserver`, `NoopObserver`                         |
//! | [`signal`]   | `SignalSource` — the narrow signal-controller interface |
//! | [`snapshot`] | `VehicleSnapshot` — read-only render row                |
//! | [`error`]    | `SimError`, `SimResult<T>`                              |

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod signal;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use error::{SimError, SimResult};
pub use fleet::{Fleet, MIN_SPAWN_SPACING};
pub use observer::{FleetObserver, NoopObserver};
pub use signal::{PermissiveSignals, SignalSource};
pub use snapshot::VehicleSnapshot;
