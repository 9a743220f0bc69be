//! `Rider` — the reference passenger.

use lift_core::{ElevatorId, Floor, TravelDirection};
use tracing::trace;

use crate::{BuildingView, ElevatorListener, ElevatorView, Intent, RiderError, RiderResult, Trip};

/// Lifecycle of a [`Rider`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiderState {
    /// Registered, not yet told the system is ready.
    Idle,
    WaitingForElevator,
    TravelingWithElevator,
    Arrived,
}

/// Which elevator, if any, the rider is inside.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Boarding {
    NotBoarded,
    Boarded(ElevatorId),
}

/// A passenger travelling from `start` to `destination`.
///
/// The rider calls an elevator toward its destination and boards the first
/// elevator at its floor whose range brings it strictly closer.  When an
/// elevator cannot reach the destination the rider rides to the nearest end
/// of that elevator's range, steps out and calls again from there.
#[derive(Clone, Debug)]
pub struct Rider {
    trip:     Trip,
    location: Floor,
    state:    RiderState,
    boarding: Boarding,
}

impl Rider {
    pub fn new(start: Floor, destination: Floor) -> RiderResult<Self> {
        if start < 1 || destination < 1 {
            return Err(RiderError::InvalidFloor { start, destination });
        }
        Ok(Self {
            trip:     Trip { start, destination },
            location: start,
            state:    RiderState::Idle,
            boarding: Boarding::NotBoarded,
        })
    }

    pub fn state(&self) -> RiderState {
        self.state
    }

    pub fn boarding(&self) -> Boarding {
        self.boarding
    }

    /// The floor the rider last stood on (inside or outside an elevator).
    pub fn location(&self) -> Floor {
        self.location
    }

    pub fn start(&self) -> Floor {
        self.trip.start
    }

    pub fn destination(&self) -> Floor {
        self.trip.destination
    }

    /// Board `elevator` if it gets us closer, and ask it for our floor.
    fn try_board(&mut self, elevator: &ElevatorView) -> Vec<Intent> {
        let target = elevator.range.clamp(self.trip.destination);
        let remaining = self.location.abs_diff(self.trip.destination);
        if target.abs_diff(self.trip.destination) >= remaining {
            return vec![];
        }

        trace!(elevator = %elevator.elevator, floor = self.location, target, "rider boards");
        self.state = RiderState::TravelingWithElevator;
        self.boarding = Boarding::Boarded(elevator.elevator);
        vec![
            Intent::Board { elevator: elevator.elevator },
            Intent::RequestStop { elevator: elevator.elevator, floor: target },
        ]
    }

    /// Ride on, or step out at the destination or at the end of the range.
    fn ride(&mut self, elevator: &ElevatorView) -> Vec<Intent> {
        self.location = elevator.floor;
        let arrived = elevator.floor == self.trip.destination;
        if !arrived && elevator.floor != elevator.range.clamp(self.trip.destination) {
            return vec![];
        }

        trace!(elevator = %elevator.elevator, floor = elevator.floor, arrived, "rider alights");
        self.boarding = Boarding::NotBoarded;
        self.state = if arrived {
            RiderState::Arrived
        } else {
            RiderState::WaitingForElevator
        };
        vec![Intent::Alight { elevator: elevator.elevator, arrived }]
    }
}

impl ElevatorListener for Rider {
    fn trip(&self) -> Option<Trip> {
        Some(self.trip)
    }

    fn on_system_ready(&mut self, _building: &BuildingView) -> Vec<Intent> {
        match self.state {
            RiderState::Idle | RiderState::WaitingForElevator => {}
            RiderState::TravelingWithElevator | RiderState::Arrived => return vec![],
        }
        match TravelDirection::between(self.location, self.trip.destination) {
            None => {
                self.state = RiderState::Arrived;
                vec![]
            }
            Some(direction) => {
                self.state = RiderState::WaitingForElevator;
                vec![Intent::RequestPickup { floor: self.location, direction }]
            }
        }
    }

    fn on_elevator_arrived(&mut self, elevator: &ElevatorView) -> Vec<Intent> {
        match (self.state, self.boarding) {
            (RiderState::WaitingForElevator, Boarding::NotBoarded)
                if elevator.floor == self.location =>
            {
                self.try_board(elevator)
            }
            (RiderState::TravelingWithElevator, Boarding::Boarded(id))
                if id == elevator.elevator =>
            {
                self.ride(elevator)
            }
            _ => vec![],
        }
    }

    fn has_arrived(&self) -> bool {
        self.state == RiderState::Arrived
    }
}
