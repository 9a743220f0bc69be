//! Observer trait for progress reporting and data collection.

use lift_core::Tick;

use crate::{ElevatorSnapshot, TickReport};

/// Callbacks invoked by the driver methods of
/// [`ElevatorSystem`][crate::ElevatorSystem] at each tick boundary.
///
/// All methods default to no-ops.
///
/// # Example — stuck-call detector
///
/// ```rust,ignore
/// struct RejectionCounter(usize);
///
/// impl TickObserver for RejectionCounter {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         self.0 += report.rejected.len();
///     }
/// }
/// ```
pub trait TickObserver {
    /// Before the tick with number `tick` is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Every `config.output_interval_ticks` ticks, after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _elevators: &[ElevatorSnapshot]) {}

    /// Once, after `run_until_idle` found no work left.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}
