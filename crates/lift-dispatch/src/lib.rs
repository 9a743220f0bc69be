//! `lift-dispatch` — elevators, the floor index, pickup assignment and the
//! tick loop.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`elevator`]    | `ElevatorUnit` — range, position, passengers, target queue |
//! | [`floor_index`] | `FloorIndex` — per-floor elevator and waiting sets        |
//! | [`scheduler`]   | Destination estimate and elevator selection               |
//! | [`system`]      | `ElevatorSystem` — registration, requests, queries        |
//! | `tick`          | `ready`, `tick` and the move / notify / apply phases      |
//! | `driver`        | `step`, `run_ticks`, `run_until_idle`                     |
//! | [`observer`]    | `TickObserver`, `NoopObserver`                            |
//! | [`report`]      | `TickReport`, `RejectedIntent`, `ElevatorSnapshot`        |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Move and notify phases run on Rayon's thread pool.          |
//! | `fx-hash`  | FxHash floor map instead of a `BTreeMap`.                   |
//!
//! The unit tests cover both builds; run them once more with
//! `--features parallel,fx-hash`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! let mut system = ElevatorSystem::new(SystemConfig::default())?;
//! system.register_elevator(1, 10, 5)?;
//! system.register_listener(Rider::new(1, 7)?)?;
//! system.ready()?;
//! system.run_until_idle(&mut NoopObserver)?;
//! ```

pub mod elevator;
pub mod error;
pub mod floor_index;
pub mod observer;
pub mod report;
pub mod scheduler;
pub mod system;

mod driver;
mod sync;
mod tick;


pub use elevator::ElevatorUnit;
pub use error::{DispatchError, DispatchResult};
pub use floor_index::{FloorIndex, FloorSlot};
pub use observer::{NoopObserver, TickObserver};
pub use report::{ElevatorSnapshot, RejectedIntent, TickReport};
pub use scheduler::{Assignment, estimate_destination};
pub use system::{ElevatorSystem, Placement};
