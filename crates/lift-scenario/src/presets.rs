//! Small hand-built scenarios for trying the dispatcher out.

use crate::ScenarioSpec;

pub fn single_elevator_single_rider() -> ScenarioSpec {
    ScenarioSpec::new("single-elevator-single-rider")
        .elevator(1, 10, 1)
        .rider(5, 10)
}

pub fn simple() -> ScenarioSpec {
    ScenarioSpec::new("simple")
        .elevator(1, 10, 1)
        .elevator(1, 10, 10)
        .rider(1, 5)
        .rider(8, 2)
        .rider(4, 10)
        .rider(9, 9)
}

/// Two elevators whose ranges do not touch; the rider cannot get past 5.
/// No chain of elevators reaches 7, so a run of this scenario always ends
/// in `DispatchError::StepLimit` with the rider waiting on floor 5.
pub fn disjoint_ranges() -> ScenarioSpec {
    ScenarioSpec::new("disjoint-ranges")
        .elevator(6, 5, 10)
        .elevator(1, 5, 5)
        .rider(1, 7)
}

/// Two elevators sharing floor 6; the rider changes there.
pub fn overlapping_ranges() -> ScenarioSpec {
    ScenarioSpec::new("overlapping-ranges")
        .elevator(6, 5, 10)
        .elevator(1, 6, 5)
        .rider(1, 8)
}

/// Three chained elevators; the rider changes twice.
pub fn three_step() -> ScenarioSpec {
    ScenarioSpec::new("three-step")
        .elevator(7, 4, 10)
        .elevator(4, 5, 5)
        .elevator(1, 5, 3)
        .rider(1, 10)
}

/// Every preset, by name.
pub fn all() -> Vec<ScenarioSpec> {
    vec![
        single_elevator_single_rider(),
        simple(),
        disjoint_ranges(),
        overlapping_ranges(),
        three_step(),
    ]
}

pub fn by_name(name: &str) -> Option<ScenarioSpec> {
    all().into_iter().find(|spec| spec.name == name)
}
