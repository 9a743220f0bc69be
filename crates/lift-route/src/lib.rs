//! `lift-route` — where an elevator goes next, and what a detour would cost.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`queue`]   | `TargetQueue` — committed stops, potential targets, insertion    |
//! | [`search`]  | Exact waypoint ordering search and greedy fallback               |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                                   |
//!
//! # Path model
//!
//! An elevator's path is its current floor followed by its committed stops in
//! queue order.  Every floor lying between two consecutive path points is
//! visited in passing, so a new stop is only committed when it is not
//! already on the path.  After each insertion the queue is reordered to the
//! shortest ordering of its stops (total floors travelled), so stops requested
//! in a zig-zag order do not make the elevator zig-zag.

pub mod error;
pub mod queue;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use queue::TargetQueue;
pub use search::{best_order, exact_order, greedy_order, path_length};
