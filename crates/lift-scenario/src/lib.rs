//! `lift-scenario` — describing, loading and running elevator scenarios.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`spec`]       | `ScenarioSpec`, `ElevatorSpec`, `RiderSpec`, `SpawnSpec`  |
//! | [`loader`]     | CSV scenario loader                                       |
//! | [`random`]     | `random_scenario` — seeded generator                      |
//! | [`presets`]    | Small hand-built scenarios                                |
//! | [`simulation`] | `Simulation` driver with per-rider statistics             |
//! | [`error`]      | `ScenarioError`, `ScenarioResult<T>`                      |

pub mod error;
pub mod loader;
pub mod presets;
pub mod random;
pub mod simulation;
pub mod spec;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult};
pub use loader::{load_scenario_csv, load_scenario_reader};
pub use random::random_scenario;
pub use simulation::{RiderStats, Simulation, SimulationSummary};
pub use spec::{ElevatorSpec, RiderSpec, ScenarioSpec, SpawnSpec};
