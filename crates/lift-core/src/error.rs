//! Workspace base error type.
//!
//! Sub-crates define their own error enums; this one covers configuration
//! problems that are not specific to any of them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;
