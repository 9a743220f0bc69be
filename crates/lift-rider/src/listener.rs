//! The `ElevatorListener` trait — the capability interface riders and
//! observers implement to take part in the simulation.

use crate::{BuildingView, ElevatorView, Intent, Trip};

/// Something that reacts to the elevator system.
///
/// All methods have defaults, so an observer only overrides what it needs.
///
/// # Placement
///
/// A listener whose [`trip`][Self::trip] returns a trip with distinct floors
/// is a *rider*: it is seeded into the waiting set of its starting floor and
/// is only shown elevators at the floor it waits on, or the elevator it rides.
/// Any other listener is *global* and is shown every elevator every tick.
///
/// # Thread safety
///
/// Riders on different floors are notified from different worker threads,
/// so implementations must be `Send`.  A single listener is never called
/// concurrently with itself.
pub trait ElevatorListener: Send + 'static {
    /// Starting and destination floors, if this listener travels.
    fn trip(&self) -> Option<Trip> {
        None
    }

    /// The system accepts calls now.  Also sent again to a rider that
    /// starts waiting on a floor while the system is running.
    fn on_system_ready(&mut self, _building: &BuildingView) -> Vec<Intent> {
        vec![]
    }

    /// `elevator` is at the listener's floor (or is the one it rides).
    fn on_elevator_arrived(&mut self, _elevator: &ElevatorView) -> Vec<Intent> {
        vec![]
    }

    /// `false` while the listener still has somewhere to go.
    fn has_arrived(&self) -> bool {
        true
    }
}

impl ElevatorListener for Box<dyn ElevatorListener> {
    fn trip(&self) -> Option<Trip> {
        (**self).trip()
    }

    fn on_system_ready(&mut self, building: &BuildingView) -> Vec<Intent> {
        (**self).on_system_ready(building)
    }

    fn on_elevator_arrived(&mut self, elevator: &ElevatorView) -> Vec<Intent> {
        (**self).on_elevator_arrived(elevator)
    }

    fn has_arrived(&self) -> bool {
        (**self).has_arrived()
    }
}
