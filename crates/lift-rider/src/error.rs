use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiderError {
    #[error("floors must be at least 1, got start {start} and destination {destination}")]
    InvalidFloor {
        start:       Floor,
        destination: Floor,
    },
}

pub type RiderResult<T> = Result<T, RiderError>;
