//! Plain row types written by output backends.

use lift_dispatch::{ElevatorSnapshot, TickReport};

/// One elevator's position at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorPositionRow {
    pub tick:         u64,
    pub elevator_id:  u32,
    pub floor:        u32,
    pub queued_stops: u32,
    pub passengers:   u32,
}

impl ElevatorPositionRow {
    pub fn from_snapshot(tick: u64, snap: &ElevatorSnapshot) -> Self {
        Self {
            tick,
            elevator_id:  snap.elevator.0,
            floor:        snap.floor,
            queued_stops: snap.stops.len() as u32,
            passengers:   snap.passengers as u32,
        }
    }
}

/// Counters for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub moved:         u32,
    pub notifications: u32,
    pub rejected:      u32,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        Self {
            tick:          report.tick.0,
            moved:         report.moved as u32,
            notifications: report.notifications as u32,
            rejected:      report.rejected.len() as u32,
        }
    }
}
