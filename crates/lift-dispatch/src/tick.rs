//! `ready`, `tick` and the move / notify / apply phases.

use std::sync::Mutex;

use lift_core::{Floor, FloorRange, ListenerId, Tick};
use lift_rider::{BuildingView, ElevatorListener, ElevatorView, Intent};
use tracing::{info, trace, warn};

use crate::sync::{get_mut, lock};
use crate::system::{Placement, RunState};
use crate::{DispatchError, DispatchResult, ElevatorSystem, ElevatorUnit, RejectedIntent, TickReport};

/// Intents collected from one unit of notify work.
#[derive(Default)]
struct Notified {
    intents:       Vec<(ListenerId, Vec<Intent>)>,
    notifications: usize,
}

impl Notified {
    fn push(&mut self, listener: ListenerId, intents: Vec<Intent>) {
        if !intents.is_empty() {
            self.intents.push((listener, intents));
        }
    }
}

impl<L: ElevatorListener> ElevatorSystem<L> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Switch from setup to running.
    ///
    /// Every registered listener gets `on_system_ready`, and every listener
    /// on a floor with an elevator is shown that elevator.  The returned
    /// report covers the intents produced.
    pub fn ready(&mut self) -> DispatchResult<TickReport> {
        let building = self.building.ok_or(DispatchError::NoElevators)?;
        let state = get_mut(&mut self.state);
        if state.running {
            return Err(DispatchError::AlreadyRunning);
        }
        state.running = true;

        info!(
            elevators = self.elevators.len(),
            listeners = self.listeners.len(),
            %building,
            "elevator system ready"
        );
        let mut state = lock(&self.state);
        let now = state.clock.current_tick;
        Ok(self.notify_and_apply(&mut state, building, now))
    }

    /// Advance every elevator one step, then notify and apply.
    ///
    /// Ticks never overlap: a second caller blocks until the first is done.
    pub fn tick(&self) -> DispatchResult<TickReport> {
        let mut state = lock(&self.state);
        if !state.running {
            return Err(DispatchError::NotReady);
        }
        let building = self.building.ok_or(DispatchError::NoElevators)?;
        state.clock.advance();
        let now = state.clock.current_tick;

        let moved = self.move_phase();
        let mut report = self.notify_and_apply(&mut state, building, now);
        report.moved = moved;

        trace!(
            tick = %now,
            moved,
            notifications = report.notifications,
            applied = report.applied,
            rejected = report.rejected.len(),
            "tick done"
        );
        Ok(report)
    }

    // ── Phase 1: move ─────────────────────────────────────────────────────

    /// Returns the number of elevators that moved.
    fn move_phase(&self) -> usize {
        #[cfg(not(feature = "parallel"))]
        {
            self.elevators
                .iter()
                .filter(|cell| self.move_elevator(cell))
                .count()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.elevators
                .par_iter()
                .filter(|cell| self.move_elevator(cell))
                .count()
        }
    }

    fn move_elevator(&self, cell: &Mutex<ElevatorUnit>) -> bool {
        let mut unit = lock(cell);
        let Some(to) = unit.next_floor() else {
            // Idle: stays put and drops its potential targets.
            unit.advance();
            return false;
        };
        let (id, from) = (unit.id(), unit.floor());
        self.floors.relocate(id, from, to, || {
            unit.advance();
        });
        true
    }

    // ── Phase 2: notify ───────────────────────────────────────────────────

    fn notify_and_apply(&self, state: &mut RunState, floors: FloorRange, now: Tick) -> TickReport {
        let building = BuildingView { floors, tick: now };

        #[cfg(not(feature = "parallel"))]
        let per_floor: Vec<Notified> = self
            .floors
            .floors()
            .iter()
            .map(|&floor| self.notify_floor(floor, &building))
            .collect();

        #[cfg(feature = "parallel")]
        let per_floor: Vec<Notified> = {
            use rayon::prelude::*;

            self.floors
                .floors()
                .par_iter()
                .map(|&floor| self.notify_floor(floor, &building))
                .collect()
        };

        let globals = self.notify_globals(state, &building);

        let mut report = TickReport { tick: now, ..TickReport::default() };
        let mut intents = Vec::new();
        for notified in per_floor.into_iter().chain([globals]) {
            report.notifications += notified.notifications;
            intents.extend(notified.intents);
        }

        // ── Phase 3: apply ────────────────────────────────────────────────
        //
        // A stable sort keeps each listener's intents in the order they were
        // produced; floors were visited in ascending order.
        intents.sort_by_key(|(listener, _)| *listener);
        for (listener, batch) in intents {
            for intent in batch {
                match self.apply_intent(state, listener, intent) {
                    Ok(()) => report.applied += 1,
                    Err(error) => {
                        warn!(%listener, ?intent, %error, "intent rejected");
                        report.rejected.push(RejectedIntent { listener, intent, error });
                    }
                }
            }
        }
        report
    }

    /// Announce and notify the listeners on one floor.
    fn notify_floor(&self, floor: Floor, building: &BuildingView) -> Notified {
        let batch = self.floors.take_batch(floor);
        let mut out = Notified::default();

        for &listener in &batch.announce {
            let intents = lock(&self.listeners[listener.index()]).on_system_ready(building);
            out.push(listener, intents);
        }

        for &elevator in &batch.elevators {
            let (view, riders) = {
                let unit = lock(&self.elevators[elevator.index()]);
                (unit.view(building.tick), unit.passengers().collect::<Vec<_>>())
            };
            for &listener in batch.waiting.iter().chain(&riders) {
                let intents = lock(&self.listeners[listener.index()]).on_elevator_arrived(&view);
                out.notifications += 1;
                out.push(listener, intents);
            }
        }
        out
    }

    /// Announce pending off-floor listeners, then show every elevator to
    /// each global listener.
    fn notify_globals(&self, state: &mut RunState, building: &BuildingView) -> Notified {
        let mut out = Notified::default();
        for listener in std::mem::take(&mut state.unannounced) {
            let intents = lock(&self.listeners[listener.index()]).on_system_ready(building);
            out.push(listener, intents);
        }

        let views: Vec<ElevatorView> = self
            .elevators
            .iter()
            .map(|cell| lock(cell).view(building.tick))
            .collect();
        let ids = (0..).map(ListenerId);
        for (listener, placement) in ids.zip(&state.placements) {
            if *placement != Placement::Global {
                continue;
            }
            let mut guard = lock(&self.listeners[listener.index()]);
            for view in &views {
                let intents = guard.on_elevator_arrived(view);
                out.notifications += 1;
                out.push(listener, intents);
            }
        }
        out
    }

    // ── Phase 3: apply ────────────────────────────────────────────────────

    fn apply_intent(&self, state: &mut RunState, listener: ListenerId, intent: Intent) -> DispatchResult<()> {
        match intent {
            Intent::RequestPickup { floor, direction } => {
                self.request_pickup(floor, direction).map(|_| ())
            }

            Intent::RequestStop { elevator, floor } => {
                self.request_stop(elevator, floor).map(|_| ())
            }

            Intent::Board { elevator } => {
                let cell = self
                    .elevators
                    .get(elevator.index())
                    .ok_or(DispatchError::UnknownElevator(elevator))?;
                let mut unit = lock(cell);
                let floor = unit.floor();
                let placement = &mut state.placements[listener.index()];
                if *placement != Placement::Waiting(floor) {
                    return Err(DispatchError::NotWaiting { listener, elevator });
                }
                assert!(
                    self.floors.remove_waiting(floor, listener),
                    "{listener} placed on floor {floor} but missing from its waiting set"
                );
                unit.board(listener);
                *placement = Placement::Riding(elevator);
                Ok(())
            }

            Intent::Alight { elevator, arrived } => {
                let cell = self
                    .elevators
                    .get(elevator.index())
                    .ok_or(DispatchError::UnknownElevator(elevator))?;
                let placement = &mut state.placements[listener.index()];
                if *placement != Placement::Riding(elevator) {
                    return Err(DispatchError::NotAboard { listener, elevator });
                }
                let mut unit = lock(cell);
                unit.alight(listener);
                *placement = if arrived {
                    Placement::Departed
                } else {
                    let floor = unit.floor();
                    self.floors.add_waiting(floor, listener, true);
                    Placement::Waiting(floor)
                };
                Ok(())
            }
        }
    }
}
