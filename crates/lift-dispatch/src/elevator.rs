//! `ElevatorUnit` — one car: identity, range, position, passengers and
//! its target queue.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use lift_core::{ElevatorId, Floor, FloorRange, ListenerId, Tick};
use lift_rider::ElevatorView;
use lift_route::TargetQueue;

use crate::{DispatchError, DispatchResult, ElevatorSnapshot};

/// A single elevator.
///
/// `floor` always lies within the queue's range.  All mutation goes through
/// `&mut self`; the system keeps each unit behind its own mutex so queue
/// insertion and movement never race.
#[derive(Debug)]
pub struct ElevatorUnit {
    id:         ElevatorId,
    floor:      Floor,
    queue:      TargetQueue,
    passengers: BTreeSet<ListenerId>,
}

impl ElevatorUnit {
    /// Validate the range `[min_floor, min_floor + floor_count - 1]` and the
    /// start floor.
    pub fn new(
        id:           ElevatorId,
        min_floor:    Floor,
        floor_count:  u32,
        start:        Floor,
        search_limit: usize,
    ) -> DispatchResult<Self> {
        let max_floor = min_floor
            .checked_add(floor_count.saturating_sub(1))
            .filter(|_| min_floor >= 1 && floor_count >= 2)
            .ok_or(DispatchError::InvalidRange { min_floor, floor_count })?;
        let range = FloorRange::new(min_floor, max_floor);
        if !range.contains(start) {
            return Err(DispatchError::StartOutOfRange {
                start,
                min: range.min,
                max: range.max,
            });
        }
        Ok(Self {
            id,
            floor:      start,
            queue:      TargetQueue::new(range, search_limit),
            passengers: BTreeSet::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn range(&self) -> FloorRange {
        self.queue.range()
    }

    pub fn queue(&self) -> &TargetQueue {
        &self.queue
    }

    pub fn passengers(&self) -> impl Iterator<Item = ListenerId> + '_ {
        self.passengers.iter().copied()
    }

    /// `true` if nothing is queued.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn view(&self, tick: Tick) -> ElevatorView {
        ElevatorView {
            elevator: self.id,
            floor:    self.floor,
            range:    self.range(),
            tick,
        }
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            elevator:   self.id,
            floor:      self.floor,
            range:      self.range(),
            stops:      self.queue.stops().collect(),
            passengers: self.passengers.len(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if every floor in `floors` is within range.
    pub fn can_serve(&self, floors: &[Floor]) -> bool {
        self.range().contains_all(floors)
    }

    pub fn will_visit(&self, floor: Floor) -> bool {
        self.queue.will_visit(self.floor, floor)
    }

    /// See [`TargetQueue::turns_to_visit`].
    pub fn turns_to_visit(&self, floors: &[Floor]) -> Option<u32> {
        self.queue.turns_to_visit(self.floor, floors)
    }

    /// Floor this elevator moves to on the next tick, if it moves.
    ///
    /// # Panics
    /// If the queue head equals the current floor.
    pub fn next_floor(&self) -> Option<Floor> {
        let head = self.queue.head()?;
        match head.cmp(&self.floor) {
            Ordering::Greater => Some(self.floor + 1),
            Ordering::Less    => Some(self.floor - 1),
            Ordering::Equal   => panic!(
                "{}: queue head {head} equals the current floor (stops {:?})",
                self.id,
                self.queue.stops().collect::<Vec<_>>()
            ),
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Commit a stop.  Returns `Ok(true)` if the queue changed.
    pub fn request_stop(&mut self, floor: Floor) -> DispatchResult<bool> {
        Ok(self.queue.request_stop(self.floor, floor)?)
    }

    pub fn add_potential(&mut self, floor: Floor) {
        self.queue.add_potential(floor);
    }

    /// Move one floor toward the queue head.
    ///
    /// Reaching the head pops it and forgets any potential target there.
    /// An idle elevator stays put and drops all potential targets.  Returns
    /// the new floor if the elevator moved.
    pub fn advance(&mut self) -> Option<Floor> {
        let Some(next) = self.next_floor() else {
            self.queue.clear_potential();
            return None;
        };
        self.floor = next;
        if self.queue.head() == Some(next) {
            self.queue.remove_head();
            self.queue.forget_potential(next);
        }
        Some(next)
    }

    /// # Panics
    /// If `listener` is already aboard.
    pub fn board(&mut self, listener: ListenerId) {
        assert!(
            self.passengers.insert(listener),
            "{listener} boarded {} twice",
            self.id
        );
    }

    /// # Panics
    /// If `listener` is not aboard.
    pub fn alight(&mut self, listener: ListenerId) {
        assert!(
            self.passengers.remove(&listener),
            "{listener} left {} without being aboard",
            self.id
        );
    }
}
