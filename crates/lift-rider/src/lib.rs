//! `lift-rider` — the listener side of the elevator system.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`intent`]   | `Intent` enum (`RequestPickup`, `Board`, `RequestStop`, `Alight`) |
//! | [`view`]     | `BuildingView`, `ElevatorView`, `Trip` — read-only callback inputs |
//! | [`listener`] | `ElevatorListener` trait                                       |
//! | [`noop`]     | `NoopListener` — never reacts                                  |
//! | [`rider`]    | `Rider` — reference passenger state machine                    |
//! | [`error`]    | `RiderError`, `RiderResult<T>`                                 |
//!
//! # Design notes
//!
//! Listeners never call back into the elevator system.  Each callback
//! returns the [`Intent`]s the listener wants carried out, and the system
//! applies them after the notification phase of the tick has finished:
//!
//! 1. **Notify** (parallel per floor): every listener at a floor is shown
//!    every elevator present there and returns intents.
//! 2. **Apply** (sequential, ascending `ListenerId`): intents become pickup
//!    calls, boarding/alighting bookkeeping and stop requests.
//!
//! This keeps listeners `Send` only; the system never holds one of its own
//! locks while a listener runs.

pub mod error;
pub mod intent;
pub mod listener;
pub mod noop;
pub mod rider;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{RiderError, RiderResult};
pub use intent::Intent;
pub use listener::ElevatorListener;
pub use noop::NoopListener;
pub use rider::{Boarding, Rider, RiderState};
pub use view::{BuildingView, ElevatorView, Trip};
