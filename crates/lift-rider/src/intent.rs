//! Listener intents — what a listener asks the elevator system to do.

use lift_core::{ElevatorId, Floor, TravelDirection};

/// An action requested by a listener during a callback.
///
/// Intents are returned by [`ElevatorListener`][crate::ElevatorListener]
/// callbacks and applied by the elevator system once the notification phase
/// of the current tick is over, in ascending listener order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Corridor call: send an elevator to `floor` for travel in `direction`.
    RequestPickup {
        floor:     Floor,
        direction: TravelDirection,
    },

    /// Step into `elevator` at its current floor.  The listener leaves the
    /// floor's waiting set and joins the elevator's boarded set.
    Board {
        elevator: ElevatorId,
    },

    /// Press a floor button inside `elevator`.
    RequestStop {
        elevator: ElevatorId,
        floor:    Floor,
    },

    /// Step out of `elevator` at its current floor.
    ///
    /// With `arrived == false` the listener waits on that floor again (it is
    /// changing elevators); otherwise it leaves the waiting population.
    Alight {
        elevator: ElevatorId,
        arrived:  bool,
    },
}
