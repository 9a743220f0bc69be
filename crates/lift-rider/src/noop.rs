//! A listener that never reacts.

use crate::ElevatorListener;

/// An [`ElevatorListener`] that ignores every event.
///
/// Useful as a placeholder in tests or to pad a system with global listeners.
pub struct NoopListener;

impl ElevatorListener for NoopListener {}
