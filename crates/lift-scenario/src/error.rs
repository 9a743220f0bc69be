use lift_dispatch::DispatchError;
use lift_rider::RiderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("invalid scenario: {0}")]
    Invalid(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Rider(#[from] RiderError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
