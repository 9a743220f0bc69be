//! `lift-core` — foundational types for the `lift_sim` elevator workspace.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `ListenerId`                            |
//! | [`floor`]       | `Floor`, `TravelDirection`, `FloorRange`              |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SystemConfig`                                        |
//! | [`rng`]         | `SimRng` (seeded scenario generation)                 |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SystemConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange, TravelDirection};
pub use ids::{ElevatorId, ListenerId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
