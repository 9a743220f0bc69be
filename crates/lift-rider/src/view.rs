//! Read-only data handed to listener callbacks.

use lift_core::{ElevatorId, Floor, FloorRange, Tick};

/// Starting and destination floor of a listener that travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub start:       Floor,
    pub destination: Floor,
}

impl Trip {
    /// `true` if the trip needs an elevator at all.
    pub fn needs_travel(&self) -> bool {
        self.start != self.destination
    }
}

/// Building-wide facts passed with `on_system_ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingView {
    /// Lowest and highest floor served by any elevator.
    pub floors: FloorRange,
    pub tick:   Tick,
}

/// An elevator standing at a floor, as seen by a listener on that floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorView {
    pub elevator: ElevatorId,
    pub floor:    Floor,
    /// Floors this elevator can serve.
    pub range:    FloorRange,
    pub tick:     Tick,
}
