//! The `ElevatorSystem` struct: registration, pickup/stop requests and
//! queries.  The tick loop lives in `tick.rs`, the drivers in `driver.rs`.

use std::sync::{Mutex, MutexGuard};

use lift_core::{ElevatorId, Floor, FloorRange, ListenerId, SimClock, SystemConfig, Tick, TravelDirection};
use lift_rider::ElevatorListener;
use tracing::debug;

use crate::scheduler::{self, Assignment, estimate_destination};
use crate::sync::{get_mut, lock};
use crate::{DispatchError, DispatchResult, ElevatorSnapshot, ElevatorUnit, FloorIndex};

// ── Placement ─────────────────────────────────────────────────────────────────

/// Where the system believes a listener is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Placement {
    /// No trip: sees every elevator every tick.
    Global,
    /// Trip from a floor to itself: told the system is ready, nothing else.
    Stationary,
    Waiting(Floor),
    Riding(ElevatorId),
    /// Got out at its destination.
    Departed,
}

/// Mutable bookkeeping owned by the tick loop.  Its mutex doubles as the
/// gate that keeps ticks from overlapping.
#[derive(Debug, Default)]
pub(crate) struct RunState {
    pub running:     bool,
    pub clock:       SimClock,
    pub placements:  Vec<Placement>,
    /// Listeners outside the floor index still owed `on_system_ready`.
    pub unannounced: Vec<ListenerId>,
}

// ── ElevatorSystem ────────────────────────────────────────────────────────────

/// A building's elevators, its floor index and the listeners riding them.
///
/// Setup (`register_*`, `ready`) takes `&mut self`.  Once running, `tick`,
/// `request_pickup` and `request_stop` take `&self` and may be called from
/// any thread; each elevator and each floor slot sits behind its own mutex.
///
/// # Tick phases
///
/// 1. **Move** (optionally parallel per elevator): each elevator steps one
///    floor toward its queue head, relocating itself in the floor index.
/// 2. **Notify** (optionally parallel per floor), only after every move has
///    finished: newly waiting listeners get `on_system_ready`, then every
///    listener waiting on a floor, or riding an elevator there, is shown each
///    elevator on that floor.  Global listeners follow, sequentially.
/// 3. **Apply** (sequential, ascending `ListenerId`): returned intents become
///    pickup calls, stop requests and boarding bookkeeping.
pub struct ElevatorSystem<L: ElevatorListener> {
    pub(crate) config:    SystemConfig,
    pub(crate) elevators: Vec<Mutex<ElevatorUnit>>,
    pub(crate) floors:    FloorIndex,
    pub(crate) listeners: Vec<Mutex<L>>,
    /// Union of all elevator ranges; `None` until one is registered.
    pub(crate) building:  Option<FloorRange>,
    pub(crate) state:     Mutex<RunState>,
}

impl<L: ElevatorListener> ElevatorSystem<L> {
    pub fn new(config: SystemConfig) -> DispatchResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            elevators: Vec::new(),
            floors:    FloorIndex::new(),
            listeners: Vec::new(),
            building:  None,
            state:     Mutex::new(RunState::default()),
        })
    }

    // ── Registration ──────────────────────────────────────────────────────

    /// Add an elevator serving `floor_count` floors from `min_floor`, parked
    /// at `start`.  Ids are handed out in registration order.
    pub fn register_elevator(
        &mut self,
        min_floor:   Floor,
        floor_count: u32,
        start:       Floor,
    ) -> DispatchResult<ElevatorId> {
        let id = ElevatorId::try_from(self.elevators.len())
            .map_err(|_| DispatchError::InvalidRange { min_floor, floor_count })?;
        let unit = ElevatorUnit::new(id, min_floor, floor_count, start, self.config.exact_search_limit)?;
        let range = unit.range();

        self.floors.ensure(range.floors());
        self.floors.place_elevator(start, id);
        self.building = Some(match self.building {
            Some(building) => building.union(range),
            None           => range,
        });
        self.elevators.push(Mutex::new(unit));

        debug!(elevator = %id, %range, start, "elevator registered");
        Ok(id)
    }

    /// Add a listener.
    ///
    /// A listener whose trip has distinct floors starts waiting on its start
    /// floor.  Every listener is told the system is ready at `ready()`, or
    /// on the next tick when registered while running.
    pub fn register_listener(&mut self, listener: L) -> DispatchResult<ListenerId> {
        let id = ListenerId::try_from(self.listeners.len())
            .map_err(|_| DispatchError::TooManyListeners(self.listeners.len()))?;
        let placement = match listener.trip() {
            Some(trip) if trip.needs_travel() => {
                self.floors.seed_waiting(trip.start, id);
                Placement::Waiting(trip.start)
            }
            Some(_) => Placement::Stationary,
            None    => Placement::Global,
        };

        let state = get_mut(&mut self.state);
        state.placements.push(placement);
        if !matches!(placement, Placement::Waiting(_)) {
            state.unannounced.push(id);
        }
        self.listeners.push(Mutex::new(listener));

        debug!(listener = %id, ?placement, "listener registered");
        Ok(id)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Corridor call at `floor` for travel in `direction`.
    ///
    /// Picks an elevator, commits `floor` as one of its stops and records
    /// the estimated destination as a potential target.  On error nothing
    /// changes.
    pub fn request_pickup(&self, floor: Floor, direction: TravelDirection) -> DispatchResult<Assignment> {
        let building = self.building.ok_or(DispatchError::NoElevators)?;
        let blocked = match direction {
            TravelDirection::Up   => floor >= building.max,
            TravelDirection::Down => floor <= building.min,
        };
        if blocked {
            return Err(DispatchError::ImpossibleDirection { floor, direction });
        }

        let estimate = estimate_destination(floor, direction, building);
        let assignment = scheduler::select(&self.elevators, floor, estimate)?;
        let mut unit = lock(&self.elevators[assignment.elevator.index()]);
        unit.request_stop(floor)?;
        unit.add_potential(estimate);
        Ok(assignment)
    }

    /// Floor button inside `elevator`.  Returns `Ok(true)` if the queue changed.
    pub fn request_stop(&self, elevator: ElevatorId, floor: Floor) -> DispatchResult<bool> {
        let cell = self
            .elevators
            .get(elevator.index())
            .ok_or(DispatchError::UnknownElevator(elevator))?;
        lock(cell).request_stop(floor)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn building(&self) -> Option<FloorRange> {
        self.building
    }

    pub fn floor_index(&self) -> &FloorIndex {
        &self.floors
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The last tick processed (`Tick(0)` before the first).
    pub fn now(&self) -> Tick {
        lock(&self.state).clock.current_tick
    }

    pub fn is_running(&self) -> bool {
        lock(&self.state).running
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<MutexGuard<'_, ElevatorUnit>> {
        self.elevators.get(id.index()).map(lock)
    }

    pub fn listener(&self, id: ListenerId) -> Option<MutexGuard<'_, L>> {
        self.listeners.get(id.index()).map(lock)
    }

    pub fn placement(&self, id: ListenerId) -> Option<Placement> {
        lock(&self.state).placements.get(id.index()).copied()
    }

    pub fn snapshots(&self) -> Vec<ElevatorSnapshot> {
        self.elevators.iter().map(|cell| lock(cell).snapshot()).collect()
    }

    /// `true` while a listener has not arrived or an elevator has stops.
    pub fn has_pending_work(&self) -> bool {
        self.listeners.iter().any(|cell| !lock(cell).has_arrived())
            || self.elevators.iter().any(|cell| !lock(cell).is_idle())
    }

    /// Consume the system and hand back its listeners in id order.
    pub fn into_listeners(self) -> Vec<L> {
        self.listeners
            .into_iter()
            .map(|cell| cell.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner))
            .collect()
    }
}
