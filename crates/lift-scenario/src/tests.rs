//! Unit tests for lift-scenario.

use lift_core::{SystemConfig, Tick};
use lift_dispatch::{DispatchError, NoopObserver};

use crate::{
    ElevatorSpec, RiderSpec, ScenarioError, ScenarioSpec, Simulation, load_scenario_reader,
    presets, random_scenario,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(spec: &ScenarioSpec) -> crate::SimulationSummary {
    Simulation::new(spec, SystemConfig::default())
        .unwrap()
        .run(&mut NoopObserver)
        .unwrap()
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn elevators_and_riders_are_read_in_order() {
        let csv = "kind,a,b,c\nelevator,1,10,5\nelevator, 6, 5, 10\nrider,1,7,\nRIDER,4,2,\n";
        let spec = load_scenario_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(spec.name, "inline");
        assert_eq!(
            spec.elevators,
            vec![
                ElevatorSpec { min_floor: 1, floor_count: 10, start_floor: 5 },
                ElevatorSpec { min_floor: 6, floor_count: 5, start_floor: 10 },
            ]
        );
        assert_eq!(
            spec.riders,
            vec![RiderSpec { start: 1, destination: 7 }, RiderSpec { start: 4, destination: 2 }]
        );
        assert_eq!(spec.spawn, None);
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let csv = "kind,a,b,c\nescalator,1,2,3\n";
        let err = load_scenario_reader(csv.as_bytes(), "bad").unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(ref msg) if msg.contains("escalator")));
    }

    #[test]
    fn elevator_without_start_floor_is_rejected() {
        let csv = "kind,a,b,c\nelevator,1,10,\n";
        assert!(matches!(
            load_scenario_reader(csv.as_bytes(), "bad"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let csv = "kind,a,b,c\nrider,one,7,\n";
        assert!(matches!(
            load_scenario_reader(csv.as_bytes(), "bad"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::path::Path::new("/definitely/not/here/scenario.csv");
        assert!(matches!(crate::load_scenario_csv(path), Err(ScenarioError::Io(_))));
    }
}

// ── Random generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use super::*;

    #[test]
    fn same_seed_same_scenario() {
        assert_eq!(random_scenario(7, 3, 20, 12), random_scenario(7, 3, 20, 12));
        assert_ne!(random_scenario(7, 3, 20, 12).riders, random_scenario(8, 3, 20, 12).riders);
    }

    #[test]
    fn sizes_and_floors_are_respected() {
        let spec = random_scenario(1, 4, 30, 15);
        assert_eq!(spec.elevators.len(), 4);
        assert_eq!(spec.riders.len(), 30);
        assert!(spec.elevators.iter().all(|e| e.min_floor == 1 && e.floor_count == 15));
        assert!(spec.elevators.iter().all(|e| (1..=15).contains(&e.start_floor)));
        assert!(spec
            .riders
            .iter()
            .all(|r| (1..=15).contains(&r.start) && (1..=15).contains(&r.destination)));
    }

    #[test]
    fn random_building_drains() {
        let summary = run(&random_scenario(3, 3, 25, 12));
        assert_eq!(summary.arrived, 25);
    }
}

// ── Presets ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod presets_tests {
    use super::*;

    #[test]
    fn presets_are_found_by_name() {
        for spec in presets::all() {
            assert_eq!(presets::by_name(&spec.name), Some(spec.clone()));
        }
        assert_eq!(presets::by_name("paternoster"), None);
    }

    #[test]
    fn single_rider_statistics() {
        let summary = run(&presets::single_elevator_single_rider());
        // 1→5 takes 4 ticks; boarding happens on the fourth, 5→10 takes 5.
        assert_eq!(summary.ticks, 9);
        assert_eq!(summary.arrived, 1);
        assert_eq!(summary.max_waiting_ticks, 3);
        assert_eq!(summary.max_travel_ticks, 5);
    }

    #[test]
    fn simple_preset_drains() {
        let mut sim = Simulation::new(&presets::simple(), SystemConfig::default()).unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.riders, 4);
        assert_eq!(summary.arrived, 4);
        // The 9→9 rider arrives when the system starts.
        assert_eq!(sim.stats()[3].arrived_at, Some(Tick(0)));
        assert_eq!(sim.stats()[3].waiting_ticks, 0);
    }

    #[test]
    fn overlapping_ranges_need_one_change() {
        let summary = run(&presets::overlapping_ranges());
        assert_eq!(summary.arrived, 1);
        assert_eq!(summary.ticks, 16);
    }

    #[test]
    fn three_step_needs_two_changes() {
        let summary = run(&presets::three_step());
        assert_eq!(summary.arrived, 1);
        assert_eq!(summary.ticks, 15);
    }

    #[test]
    fn disjoint_ranges_hit_the_step_limit() {
        let config = SystemConfig { max_ticks: 50, ..SystemConfig::default() };
        let mut sim = Simulation::new(&presets::disjoint_ranges(), config).unwrap();
        assert!(matches!(
            sim.run(&mut NoopObserver),
            Err(ScenarioError::Dispatch(DispatchError::StepLimit(50)))
        ));
        assert_eq!(sim.summary().arrived, 0);
        // Rode 1→5 (boarded on tick 4, alighted on tick 8) and is stranded there.
        assert_eq!(sim.stats()[0].travel_ticks, 4);
        assert_eq!(
            sim.system().placement(sim.stats()[0].listener),
            Some(lift_dispatch::Placement::Waiting(5))
        );
        let listener = sim.stats()[0].listener;
        assert_eq!(
            sim.system().listener(listener).unwrap().state(),
            lift_rider::RiderState::WaitingForElevator
        );
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod simulation {
    use super::*;

    #[test]
    fn invalid_rider_is_reported() {
        let spec = ScenarioSpec::new("bad").elevator(1, 10, 1).rider(0, 3);
        assert!(matches!(
            Simulation::new(&spec, SystemConfig::default()),
            Err(ScenarioError::Rider(_))
        ));
    }

    #[test]
    fn invalid_elevator_is_reported() {
        let spec = ScenarioSpec::new("bad").elevator(1, 1, 1);
        assert!(matches!(
            Simulation::new(&spec, SystemConfig::default()),
            Err(ScenarioError::Dispatch(DispatchError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn zero_spawn_interval_is_rejected() {
        let spec = presets::single_elevator_single_rider().spawning(0, 3);
        assert!(matches!(
            Simulation::new(&spec, SystemConfig::default()),
            Err(ScenarioError::Invalid(_))
        ));
    }

    #[test]
    fn spawned_riders_join_and_arrive() {
        let spec = presets::single_elevator_single_rider().spawning(3, 2);
        let mut sim = Simulation::new(&spec, SystemConfig::default()).unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.riders, 3);
        assert_eq!(summary.arrived, 3);
        assert_eq!(sim.stats()[1].spawned_at, Tick(2));
        assert_eq!(sim.stats()[2].spawned_at, Tick(5));
    }

    #[test]
    fn rider_added_before_start_is_counted() {
        let mut sim =
            Simulation::new(&presets::single_elevator_single_rider(), SystemConfig::default())
                .unwrap();
        sim.add_rider(2, 8).unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(summary.riders, 2);
        assert_eq!(summary.arrived, 2);
    }

    #[test]
    fn summary_prints_arrivals() {
        let summary = run(&presets::single_elevator_single_rider());
        let text = summary.to_string();
        assert!(text.contains("single-elevator-single-rider"));
        assert!(text.contains("1/1"));
    }
}
