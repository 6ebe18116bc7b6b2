//! Framework error type.
//!
//! The simulation loop itself degrades rather than fails (bad vehicle state
//! heals in place, geometry lookups are total), so errors only appear at the
//! construction and configuration seams.  Sub-crates define their own error
//! enums and either wrap `CoreError` as a variant or stay independent.

use thiserror::Error;

/// The top-level error type for `cw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `cw-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
