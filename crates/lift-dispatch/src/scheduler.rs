//! Pickup assignment: destination estimate and elevator selection.

use std::sync::Mutex;

use lift_core::{ElevatorId, Floor, FloorRange, TravelDirection};
use tracing::debug;

use crate::sync::lock;
use crate::{DispatchError, DispatchResult, ElevatorUnit};

/// The outcome of a successful `request_pickup`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Assignment {
    pub elevator: ElevatorId,
    /// Estimated destination used for scoring, recorded as a potential
    /// target on the chosen elevator.
    pub estimate: Floor,
    /// `false` if no elevator could serve both the call floor and the
    /// estimate, and the nearest range was used instead.
    pub direct:   bool,
}

/// Guess where a rider calling from `floor` wants to go: half of the way to
/// the building's extreme in `direction`, rounded up.
///
/// Rounding up biases the guess toward the far end.  Treat it as a tunable
/// heuristic.
pub fn estimate_destination(floor: Floor, direction: TravelDirection, building: FloorRange) -> Floor {
    match direction {
        TravelDirection::Up => {
            let span = building.max.saturating_sub(floor);
            floor + span.div_ceil(2)
        }
        TravelDirection::Down => {
            let span = floor.saturating_sub(building.min);
            floor - span.div_ceil(2)
        }
    }
}

/// Scores of one elevator for one call.
struct Score {
    elevator: ElevatorId,
    /// Turns to visit the call floor and then the estimate.
    direct:   Option<u32>,
    /// Distance from the range to the estimate, then turns to the call floor.
    nearest:  Option<(u32, u32)>,
}

/// Pick the elevator for a call at `floor` with estimated destination
/// `estimate`.  Ties go to the lowest id.
///
/// Each elevator is locked only while it is scored, so the choice may be
/// slightly stale by the time the stop is committed.
pub(crate) fn select(
    elevators: &[Mutex<ElevatorUnit>],
    floor:     Floor,
    estimate:  Floor,
) -> DispatchResult<Assignment> {
    if elevators.is_empty() {
        return Err(DispatchError::NoElevators);
    }

    let scores: Vec<Score> = elevators
        .iter()
        .map(|cell| {
            let unit = lock(cell);
            Score {
                elevator: unit.id(),
                direct:   unit.turns_to_visit(&[floor, estimate]),
                nearest:  unit
                    .turns_to_visit(&[floor])
                    .map(|turns| (unit.range().distance_to(estimate), turns)),
            }
        })
        .collect();

    let direct = scores
        .iter()
        .filter_map(|s| s.direct.map(|turns| (turns, s.elevator)))
        .min();
    if let Some((turns, elevator)) = direct {
        debug!(%elevator, floor, estimate, turns, "pickup assigned");
        return Ok(Assignment { elevator, estimate, direct: true });
    }

    let nearest = scores
        .iter()
        .filter_map(|s| s.nearest.map(|score| (score, s.elevator)))
        .min();
    match nearest {
        Some(((distance, turns), elevator)) => {
            debug!(%elevator, floor, estimate, distance, turns, "pickup assigned to nearest range");
            Ok(Assignment { elevator, estimate, direct: false })
        }
        None => Err(DispatchError::NoCapableElevator { floor }),
    }
}
