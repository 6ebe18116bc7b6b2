//! `cw-core` — foundational types for the `crossway` intersection simulator.
//!
//! This crate is a dependency of every other `cw-*` crate.  It intentionally
//! has no `cw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`geom`]     | `Vec2`, `Pose`, angle normalization                     |
//! | [`ids`]      | `VehicleId`                                             |
//! | [`traffic`]  | `Approach`, `TurnType`, `Lane`, `LightColor`, `LightMap`, `ColorTag` |
//! | [`scene`]    | `SceneBounds`                                           |
//! | [`clock`]    | `SimClock`                                              |
//! | [`settings`] | `SimSettings`                                           |
//! | [`rng`]      | `SimRng` (seeded, injectable)                           |
//! | [`error`]    | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod scene;
pub mod settings;
pub mod traffic;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::SimClock;
pub use error::{CoreError, CoreResult};
pub use geom::{Pose, Vec2, normalize_angle};
pub use ids::VehicleId;
pub use rng::SimRng;
pub use scene::SceneBounds;
pub use settings::SimSettings;
pub use traffic::{Approach, ColorTag, Lane, LightColor, LightMap, TurnType};
