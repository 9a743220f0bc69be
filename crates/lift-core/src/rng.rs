//! Deterministic simulation-level RNG.
//!
//! Scenario generators draw every random value from one `SimRng` seeded with
//! `SystemConfig::seed`, so a seed printed at the start of a run reproduces
//! the same building and population.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Floor;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG for scenario generation.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream, e.g. for riders spawned while a run
    /// is in progress.  Different `stream` values give different children.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform floor in `min..=max`.
    #[inline]
    pub fn floor_in(&mut self, min: Floor, max: Floor) -> Floor {
        self.0.gen_range(min..=max)
    }
}
