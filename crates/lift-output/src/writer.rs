//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorPositionRow, OutputResult, TickSummaryRow};

/// A sink for run output.
///
/// The observer stores the first error instead of failing the run; see
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    fn write_positions(&mut self, rows: &[ElevatorPositionRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
