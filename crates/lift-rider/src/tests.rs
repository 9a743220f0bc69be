//! Unit tests for lift-rider.

use lift_core::{ElevatorId, Floor, FloorRange, Tick, TravelDirection};

use crate::{
    Boarding, BuildingView, ElevatorListener, ElevatorView, Intent, NoopListener, Rider,
    RiderError, RiderState, Trip,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn building() -> BuildingView {
    BuildingView { floors: FloorRange::new(1, 10), tick: Tick::ZERO }
}

fn view(id: u32, floor: Floor, min: Floor, max: Floor) -> ElevatorView {
    ElevatorView {
        elevator: ElevatorId(id),
        floor,
        range:    FloorRange::new(min, max),
        tick:     Tick(1),
    }
}

/// A rider that has announced itself and is waiting at `start`.
fn waiting(start: Floor, destination: Floor) -> Rider {
    let mut rider = Rider::new(start, destination).unwrap();
    rider.on_system_ready(&building());
    rider
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn floor_zero_is_rejected() {
        assert_eq!(
            Rider::new(0, 4).unwrap_err(),
            RiderError::InvalidFloor { start: 0, destination: 4 }
        );
        assert!(Rider::new(3, 0).is_err());
    }

    #[test]
    fn new_rider_is_idle_at_start() {
        let rider = Rider::new(2, 9).unwrap();
        assert_eq!(rider.state(), RiderState::Idle);
        assert_eq!(rider.boarding(), Boarding::NotBoarded);
        assert_eq!(rider.location(), 2);
        assert_eq!(rider.trip(), Some(Trip { start: 2, destination: 9 }));
        assert!(!rider.has_arrived());
    }
}

// ── System ready ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod ready {
    use super::*;

    #[test]
    fn calls_an_elevator_toward_the_destination() {
        let mut up = Rider::new(1, 7).unwrap();
        assert_eq!(
            up.on_system_ready(&building()),
            vec![Intent::RequestPickup { floor: 1, direction: TravelDirection::Up }]
        );
        assert_eq!(up.state(), RiderState::WaitingForElevator);

        let mut down = Rider::new(8, 3).unwrap();
        assert_eq!(
            down.on_system_ready(&building()),
            vec![Intent::RequestPickup { floor: 8, direction: TravelDirection::Down }]
        );
    }

    #[test]
    fn same_floor_trip_arrives_without_calling() {
        let mut rider = Rider::new(4, 4).unwrap();
        assert!(rider.on_system_ready(&building()).is_empty());
        assert_eq!(rider.state(), RiderState::Arrived);
        assert!(rider.has_arrived());
        assert!(!rider.trip().unwrap().needs_travel());
    }

    #[test]
    fn travelling_rider_ignores_ready() {
        let mut rider = waiting(1, 7);
        rider.on_elevator_arrived(&view(0, 1, 1, 10));
        assert!(rider.on_system_ready(&building()).is_empty());
        assert_eq!(rider.state(), RiderState::TravelingWithElevator);
    }
}

// ── Boarding and riding ───────────────────────────────────────────────────────

#[cfg(test)]
mod riding {
    use super::*;

    #[test]
    fn boards_and_presses_destination() {
        let mut rider = waiting(1, 7);
        let intents = rider.on_elevator_arrived(&view(2, 1, 1, 10));
        assert_eq!(
            intents,
            vec![
                Intent::Board { elevator: ElevatorId(2) },
                Intent::RequestStop { elevator: ElevatorId(2), floor: 7 },
            ]
        );
        assert_eq!(rider.boarding(), Boarding::Boarded(ElevatorId(2)));
    }

    #[test]
    fn elevator_on_another_floor_is_ignored() {
        let mut rider = waiting(1, 7);
        assert!(rider.on_elevator_arrived(&view(0, 3, 1, 10)).is_empty());
        assert_eq!(rider.state(), RiderState::WaitingForElevator);
    }

    #[test]
    fn short_range_elevator_takes_rider_to_its_end() {
        let mut rider = waiting(1, 7);
        let intents = rider.on_elevator_arrived(&view(1, 1, 1, 5));
        assert_eq!(intents[1], Intent::RequestStop { elevator: ElevatorId(1), floor: 5 });
    }

    #[test]
    fn elevator_that_gets_no_closer_is_not_boarded() {
        // Already at the top of this elevator's range.
        let mut rider = waiting(5, 7);
        assert!(rider.on_elevator_arrived(&view(1, 5, 1, 5)).is_empty());
        assert_eq!(rider.boarding(), Boarding::NotBoarded);
    }

    #[test]
    fn intermediate_floors_keep_the_rider_aboard() {
        let mut rider = waiting(1, 7);
        rider.on_elevator_arrived(&view(0, 1, 1, 10));
        assert!(rider.on_elevator_arrived(&view(0, 4, 1, 10)).is_empty());
        assert_eq!(rider.location(), 4);
        // Another elevator passing by is not ours.
        assert!(rider.on_elevator_arrived(&view(1, 4, 1, 10)).is_empty());
    }

    #[test]
    fn alights_at_destination() {
        let mut rider = waiting(1, 7);
        rider.on_elevator_arrived(&view(0, 1, 1, 10));
        assert_eq!(
            rider.on_elevator_arrived(&view(0, 7, 1, 10)),
            vec![Intent::Alight { elevator: ElevatorId(0), arrived: true }]
        );
        assert_eq!(rider.state(), RiderState::Arrived);
        assert_eq!(rider.boarding(), Boarding::NotBoarded);
        assert!(rider.has_arrived());
    }

    #[test]
    fn transfers_at_range_end_and_calls_again() {
        let mut rider = waiting(1, 7);
        rider.on_elevator_arrived(&view(1, 1, 1, 6));
        assert_eq!(
            rider.on_elevator_arrived(&view(1, 6, 1, 6)),
            vec![Intent::Alight { elevator: ElevatorId(1), arrived: false }]
        );
        assert_eq!(rider.state(), RiderState::WaitingForElevator);
        assert_eq!(rider.location(), 6);

        assert_eq!(
            rider.on_system_ready(&building()),
            vec![Intent::RequestPickup { floor: 6, direction: TravelDirection::Up }]
        );
        let intents = rider.on_elevator_arrived(&view(0, 6, 6, 10));
        assert_eq!(intents[0], Intent::Board { elevator: ElevatorId(0) });
    }

    #[test]
    fn arrived_rider_ignores_everything() {
        let mut rider = Rider::new(3, 3).unwrap();
        rider.on_system_ready(&building());
        assert!(rider.on_elevator_arrived(&view(0, 3, 1, 10)).is_empty());
    }
}

// ── Trait defaults ────────────────────────────────────────────────────────────

#[cfg(test)]
mod listener_defaults {
    use super::*;

    #[test]
    fn noop_listener_is_global_and_silent() {
        let mut noop = NoopListener;
        assert_eq!(noop.trip(), None);
        assert!(noop.on_system_ready(&building()).is_empty());
        assert!(noop.on_elevator_arrived(&view(0, 1, 1, 10)).is_empty());
        assert!(noop.has_arrived());
    }

    #[test]
    fn boxed_listener_forwards_calls() {
        let mut boxed: Box<dyn ElevatorListener> = Box::new(Rider::new(2, 5).unwrap());
        assert_eq!(boxed.trip(), Some(Trip { start: 2, destination: 5 }));
        assert_eq!(boxed.on_system_ready(&building()).len(), 1);
        assert!(!boxed.has_arrived());
    }
}
