//! Top-level system configuration.

use crate::{LiftError, LiftResult};

/// Configuration shared by the dispatcher, the drivers and the binaries.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature enabled).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig {
    /// Largest number of committed stops for which a target queue runs the
    /// exact waypoint ordering search.  Longer queues fall back to a greedy
    /// nearest-neighbour ordering.
    pub exact_search_limit: usize,

    /// Upper bound on ticks for `run_until_idle`.  A run that has not
    /// drained all work by then is almost certainly stuck.
    pub max_ticks: u64,

    /// Report an elevator snapshot to observers every N ticks.
    /// 1 = every tick; 0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Master RNG seed for generated scenarios.
    pub seed: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            exact_search_limit:    8,
            max_ticks:             100_000,
            output_interval_ticks: 1,
            num_threads:           None,
            seed:                  42,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the dispatcher cannot run with.
    pub fn validate(&self) -> LiftResult<()> {
        if self.exact_search_limit < 2 {
            return Err(LiftError::Config(format!(
                "exact_search_limit must be at least 2, got {}",
                self.exact_search_limit
            )));
        }
        if self.max_ticks == 0 {
            return Err(LiftError::Config("max_ticks must be positive".into()));
        }
        if self.num_threads == Some(0) {
            return Err(LiftError::Config("num_threads must be positive when set".into()));
        }
        Ok(())
    }
}
