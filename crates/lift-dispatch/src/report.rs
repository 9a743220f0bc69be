//! Per-tick results handed to observers.

use lift_core::{ElevatorId, Floor, FloorRange, ListenerId, Tick};
use lift_rider::Intent;

use crate::DispatchError;

/// An intent the system refused to carry out.  Not retried.
#[derive(Debug)]
pub struct RejectedIntent {
    pub listener: ListenerId,
    pub intent:   Intent,
    pub error:    DispatchError,
}

/// What happened during one tick (or during `ready`, with `moved == 0`).
#[derive(Debug, Default)]
pub struct TickReport {
    pub tick:          Tick,
    /// Elevators that moved a floor.
    pub moved:         usize,
    /// `on_elevator_arrived` calls delivered.
    pub notifications: usize,
    /// Intents carried out.
    pub applied:       usize,
    pub rejected:      Vec<RejectedIntent>,
}

/// Point-in-time state of one elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub elevator:   ElevatorId,
    pub floor:      Floor,
    pub range:      FloorRange,
    /// Committed stops in visiting order.
    pub stops:      Vec<Floor>,
    pub passengers: usize,
}
