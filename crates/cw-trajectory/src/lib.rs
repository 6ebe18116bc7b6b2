//! `cw-trajectory` — piecewise-arc paths parameterized by arc-length.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`segment`] | `PathSegment` — one (length, curvature) piece             |
//! | [`path`]    | `Trajectory`, `StitchPoint` — construction and sampling   |
//! | [`error`]   | `TrajectoryError`, `TrajectoryResult<T>`                  |
//!
//! # Model
//!
//! A trajectory is a chain of straight lines and circular arcs described by
//! `(length, curvature)` pairs.  Construction walks the chain once with the
//! bicycle-model identity `heading' = curvature` (exact for lines and arcs)
//! and precomputes a *stitching point* at every segment boundary: cumulative
//! arc-length, heading, position, and arc center.  Sampling then resolves any
//! arc-length to a position with a linear scan over those points — at most
//! three segments occur per turn path in this system, so a scan beats a
//! binary search.
//!
//! Arc endpoints come from the circle equation, not from stepped
//! integration, so there is no accumulated linear-approximation error no
//! matter how coarse the caller's tick is.

pub mod error;
pub mod path;
pub mod segment;


pub use error::{TrajectoryError, TrajectoryResult};
pub use path::{StitchPoint, Trajectory};
pub use segment::{CURVATURE_EPSILON, PathSegment, STRAIGHT_RADIUS};
