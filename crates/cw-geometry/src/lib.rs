//! `cw-geometry` — the intersection geometry provider.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`layout`] | `IntersectionLayout` — anchors, stop lines, footprint      |
//! | [`turns`]  | turn-path constants and `(length, curvature)` compilation  |
//!
//! Translates `{approach, turn type}` into the concrete anchors and paths
//! vehicles follow: entry and exit lane centers, stop lines, canvas-edge
//! spawn points, the intersection footprint, and compiled segment lists for
//! the trajectory engine.  Every lookup is a total function over the enum
//! domain — there is no fallible path through this crate.

pub mod layout;
pub mod turns;


pub use layout::{IntersectionLayout, Rect, StopLine};
pub use turns::{LEFT_LEAD_IN, LEFT_TURN_RADIUS, RIGHT_LEAD_IN, RIGHT_TURN_RADIUS};
