//! `FloorIndex` — which elevators stand and which listeners wait on each floor.
//!
//! Every floor has its own slot behind its own mutex.  Relocating an
//! elevator locks the two slots involved in ascending floor order, so
//! concurrent relocations never deadlock and no reader ever sees an elevator
//! on zero or two floors.

#[cfg(not(feature = "fx-hash"))]
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;

use lift_core::{ElevatorId, Floor, ListenerId};

use crate::sync::{get_mut, lock};

#[cfg(not(feature = "fx-hash"))]
type FloorMap<V> = BTreeMap<Floor, V>;
#[cfg(feature = "fx-hash")]
type FloorMap<V> = rustc_hash::FxHashMap<Floor, V>;

// ── FloorSlot ─────────────────────────────────────────────────────────────────

/// Membership of one floor.
#[derive(Debug, Default)]
pub struct FloorSlot {
    elevators:   BTreeSet<ElevatorId>,
    waiting:     BTreeSet<ListenerId>,
    /// Waiting listeners that have not been sent `on_system_ready` since
    /// they started waiting here.  Always a subset of `waiting`.
    unannounced: BTreeSet<ListenerId>,
}

/// What the notify phase needs from one floor, copied out under the lock.
pub(crate) struct FloorBatch {
    pub announce:  Vec<ListenerId>,
    pub waiting:   Vec<ListenerId>,
    pub elevators: Vec<ElevatorId>,
}

// ── FloorIndex ────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct FloorIndex {
    slots: FloorMap<Mutex<FloorSlot>>,
    /// Slot keys in ascending order.
    order: Vec<Floor>,
}

impl FloorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every floor with a slot, ascending.
    pub fn floors(&self) -> &[Floor] {
        &self.order
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.slots.contains_key(&floor)
    }

    /// Create empty slots for any of `floors` that lack one.
    pub fn ensure(&mut self, floors: impl IntoIterator<Item = Floor>) {
        let before = self.slots.len();
        for floor in floors {
            self.slots.entry(floor).or_default();
        }
        if self.slots.len() != before {
            self.order = self.slots.keys().copied().collect();
            self.order.sort_unstable();
        }
    }

    /// Put a newly registered elevator on `floor`.
    pub fn place_elevator(&mut self, floor: Floor, elevator: ElevatorId) {
        self.ensure([floor]);
        let slot = self.slot_mut(floor);
        assert!(slot.elevators.insert(elevator), "{elevator} placed twice");
    }

    /// Move `elevator` from `from` to `to`, running `step` while both slots
    /// are held so the move is atomic to readers.
    ///
    /// # Panics
    /// If `elevator` is not on `from`, or either floor has no slot.
    pub fn relocate(&self, elevator: ElevatorId, from: Floor, to: Floor, step: impl FnOnce()) {
        assert_ne!(from, to, "{elevator} relocated onto its own floor");
        let (low, high) = (from.min(to), from.max(to));
        let mut low_slot = lock(self.slot(low));
        let mut high_slot = lock(self.slot(high));
        let (old, new) = if from < to {
            (&mut low_slot, &mut high_slot)
        } else {
            (&mut high_slot, &mut low_slot)
        };

        assert!(old.elevators.remove(&elevator), "{elevator} missing from floor {from}");
        step();
        assert!(new.elevators.insert(elevator), "{elevator} already on floor {to}");
    }

    /// Start `listener` waiting on `floor`.  `announce` queues an
    /// `on_system_ready` for the next notify phase.
    pub fn add_waiting(&self, floor: Floor, listener: ListenerId, announce: bool) {
        let mut slot = lock(self.slot(floor));
        slot.waiting.insert(listener);
        if announce {
            slot.unannounced.insert(listener);
        }
    }

    /// Like [`add_waiting`][Self::add_waiting] but creates the slot if the
    /// floor is outside every elevator's range.
    pub fn seed_waiting(&mut self, floor: Floor, listener: ListenerId) {
        self.ensure([floor]);
        let slot = self.slot_mut(floor);
        slot.waiting.insert(listener);
        slot.unannounced.insert(listener);
    }

    /// Returns `false` if `listener` was not waiting on `floor`.
    pub fn remove_waiting(&self, floor: Floor, listener: ListenerId) -> bool {
        let mut slot = lock(self.slot(floor));
        slot.unannounced.remove(&listener);
        slot.waiting.remove(&listener)
    }

    pub fn elevators_at(&self, floor: Floor) -> Vec<ElevatorId> {
        self.slots
            .get(&floor)
            .map(|slot| lock(slot).elevators.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn waiting_at(&self, floor: Floor) -> Vec<ListenerId> {
        self.slots
            .get(&floor)
            .map(|slot| lock(slot).waiting.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Total waiting listeners over all floors.
    pub fn waiting_count(&self) -> usize {
        self.slots.values().map(|slot| lock(slot).waiting.len()).sum()
    }

    /// Copy out one floor's membership and clear its announcement set.
    pub(crate) fn take_batch(&self, floor: Floor) -> FloorBatch {
        let mut slot = lock(self.slot(floor));
        let announce = std::mem::take(&mut slot.unannounced).into_iter().collect();
        FloorBatch {
            announce,
            waiting:   slot.waiting.iter().copied().collect(),
            elevators: slot.elevators.iter().copied().collect(),
        }
    }

    fn slot(&self, floor: Floor) -> &Mutex<FloorSlot> {
        self.slots
            .get(&floor)
            .unwrap_or_else(|| panic!("floor {floor} has no slot in the floor index"))
    }

    fn slot_mut(&mut self, floor: Floor) -> &mut FloorSlot {
        let slot = self
            .slots
            .get_mut(&floor)
            .unwrap_or_else(|| panic!("floor {floor} has no slot in the floor index"));
        get_mut(slot)
    }
}
