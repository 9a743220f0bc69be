//! Plain scenario descriptions.

use lift_core::Floor;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevatorSpec {
    pub min_floor:   Floor,
    pub floor_count: u32,
    pub start_floor: Floor,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderSpec {
    pub start:       Floor,
    pub destination: Floor,
}

/// Add one random rider every `every_ticks` ticks, `count` times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSpec {
    pub every_ticks: u64,
    pub count:       u32,
}

/// A building and its initial population.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name:      String,
    pub elevators: Vec<ElevatorSpec>,
    pub riders:    Vec<RiderSpec>,
    #[serde(default)]
    pub spawn:     Option<SpawnSpec>,
}

impl ScenarioSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn elevator(mut self, min_floor: Floor, floor_count: u32, start_floor: Floor) -> Self {
        self.elevators.push(ElevatorSpec { min_floor, floor_count, start_floor });
        self
    }

    pub fn rider(mut self, start: Floor, destination: Floor) -> Self {
        self.riders.push(RiderSpec { start, destination });
        self
    }

    pub fn spawning(mut self, every_ticks: u64, count: u32) -> Self {
        self.spawn = Some(SpawnSpec { every_ticks, count });
        self
    }
}
