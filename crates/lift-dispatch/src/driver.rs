//! Driver loops over `tick` with observer callbacks.

use lift_core::Tick;
use lift_rider::ElevatorListener;
use tracing::info;

use crate::{DispatchError, DispatchResult, ElevatorSystem, TickObserver, TickReport};

impl<L: ElevatorListener> ElevatorSystem<L> {
    /// One tick wrapped in observer callbacks.
    pub fn step<O: TickObserver>(&self, observer: &mut O) -> DispatchResult<TickReport> {
        observer.on_tick_start(self.now() + 1);
        let report = self.tick()?;
        observer.on_tick_end(&report);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && report.tick.0 % interval == 0 {
            observer.on_snapshot(report.tick, &self.snapshots());
        }
        Ok(report)
    }

    /// Run exactly `n` ticks, regardless of pending work.
    pub fn run_ticks<O: TickObserver>(&self, n: u64, observer: &mut O) -> DispatchResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Tick until [`has_pending_work`][Self::has_pending_work] is `false`.
    ///
    /// Fails with [`DispatchError::StepLimit`] after `config.max_ticks`
    /// ticks; riders that can never reach their destination keep a run busy
    /// forever.  Returns the final tick.
    pub fn run_until_idle<O: TickObserver>(&self, observer: &mut O) -> DispatchResult<Tick> {
        let limit = self.config.max_ticks;
        let mut ticks = 0;
        while self.has_pending_work() {
            if ticks == limit {
                return Err(DispatchError::StepLimit(limit));
            }
            self.step(observer)?;
            ticks += 1;
        }

        let end = self.now();
        observer.on_run_end(end);
        info!(final_tick = %end, ticks, "run finished");
        Ok(end)
    }
}
