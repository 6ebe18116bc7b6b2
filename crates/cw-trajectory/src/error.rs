use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("trajectory needs at least one segment")]
    Empty,

    #[error("trajectory inputs must be finite")]
    NonFinite,
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;
