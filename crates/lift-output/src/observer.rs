//! `OutputObserver<W>` — bridges `TickObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_dispatch::{ElevatorSnapshot, TickObserver, TickReport};
use tracing::warn;

use crate::row::{ElevatorPositionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TickObserver`] that records tick summaries and elevator positions.
///
/// Observer hooks cannot fail, so the first write error is kept and can be
/// collected with [`take_error`][Self::take_error] once the run returns.
/// Later writes are still attempted.
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer now; `run_until_idle` does this on its own, but a
    /// `run_ticks` caller has to.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TickObserver for OutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, elevators: &[ElevatorSnapshot]) {
        let rows: Vec<ElevatorPositionRow> = elevators
            .iter()
            .map(|snap| ElevatorPositionRow::from_snapshot(tick.0, snap))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
