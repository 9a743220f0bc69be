use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("floor {floor} cannot be served, only {min} to {max} are available")]
    FloorOutOfRange {
        floor: Floor,
        min:   Floor,
        max:   Floor,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
