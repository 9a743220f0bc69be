//! Seeded random scenarios.

use lift_core::SimRng;

use crate::ScenarioSpec;

/// `elevators` elevators all serving floors `1..=floors` from random start
/// floors, and `riders` riders with random start and destination floors.
///
/// The same arguments always produce the same scenario.  Riders may start
/// on their destination floor.
///
/// # Panics
/// If `floors` is zero.
pub fn random_scenario(seed: u64, elevators: usize, riders: usize, floors: u32) -> ScenarioSpec {
    let mut rng = SimRng::new(seed);
    let mut spec = ScenarioSpec::new(format!("random-{seed}"));
    for _ in 0..elevators {
        let start = rng.floor_in(1, floors);
        spec = spec.elevator(1, floors, start);
    }
    for _ in 0..riders {
        let start = rng.floor_in(1, floors);
        let destination = rng.floor_in(1, floors);
        spec = spec.rider(start, destination);
    }
    spec
}
