//! `Simulation` — builds a system from a scenario, drives it and collects
//! per-rider statistics.

use std::fmt;

use lift_core::{Floor, ListenerId, SimRng, SystemConfig, Tick};
use lift_dispatch::{DispatchError, ElevatorSystem, Placement, TickObserver, TickReport};
use lift_rider::Rider;
use tracing::{debug, info};

use crate::{ScenarioError, ScenarioResult, ScenarioSpec};

// ── Statistics ────────────────────────────────────────────────────────────────

/// Counters for one rider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiderStats {
    pub listener:      ListenerId,
    pub start:         Floor,
    pub destination:   Floor,
    pub spawned_at:    Tick,
    /// Ticks that ended with the rider waiting on a floor.
    pub waiting_ticks: u64,
    /// Ticks that ended with the rider inside an elevator.
    pub travel_ticks:  u64,
    pub arrived_at:    Option<Tick>,
}

/// Outcome of a finished (or aborted) run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    pub name:               String,
    pub ticks:              u64,
    pub riders:             usize,
    pub arrived:            usize,
    pub mean_waiting_ticks: f64,
    pub mean_travel_ticks:  f64,
    pub max_waiting_ticks:  u64,
    pub max_travel_ticks:   u64,
    pub rejected_intents:   usize,
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {}: {} ticks", self.name, self.ticks)?;
        writeln!(f, "  riders arrived  {}/{}", self.arrived, self.riders)?;
        writeln!(
            f,
            "  waiting ticks   mean {:.1}, max {}",
            self.mean_waiting_ticks, self.max_waiting_ticks
        )?;
        writeln!(
            f,
            "  travel ticks    mean {:.1}, max {}",
            self.mean_travel_ticks, self.max_travel_ticks
        )?;
        write!(f, "  rejected intents {}", self.rejected_intents)
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// Spawned riders draw from their own stream so they do not replay the
/// floors `random_scenario` drew from the same seed.
const SPAWN_STREAM: u64 = 1;

struct Spawner {
    every_ticks: u64,
    remaining:   u32,
}

/// A scenario loaded into an [`ElevatorSystem`] of [`Rider`]s.
///
/// ```rust,ignore
/// let mut sim = Simulation::new(&presets::simple(), SystemConfig::default())?;
/// let summary = sim.run(&mut NoopObserver)?;
/// println!("{summary}");
/// ```
pub struct Simulation {
    name:     String,
    system:   ElevatorSystem<Rider>,
    stats:    Vec<RiderStats>,
    spawner:  Option<Spawner>,
    rng:      SimRng,
    rejected: usize,
}

impl Simulation {
    /// Register the scenario's elevators and riders.  The system is not
    /// started yet.
    pub fn new(spec: &ScenarioSpec, config: SystemConfig) -> ScenarioResult<Self> {
        let spawner = match spec.spawn {
            Some(spawn) if spawn.every_ticks == 0 => {
                return Err(ScenarioError::Invalid("spawn interval must be positive".into()));
            }
            Some(spawn) => Some(Spawner { every_ticks: spawn.every_ticks, remaining: spawn.count }),
            None => None,
        };

        let rng = SimRng::new(config.seed).child(SPAWN_STREAM);
        let mut system = ElevatorSystem::new(config)?;
        for elevator in &spec.elevators {
            system.register_elevator(elevator.min_floor, elevator.floor_count, elevator.start_floor)?;
        }

        let mut sim = Self {
            name: spec.name.clone(),
            system,
            stats: Vec::with_capacity(spec.riders.len()),
            spawner,
            rng,
            rejected: 0,
        };
        for rider in &spec.riders {
            sim.add_rider(rider.start, rider.destination)?;
        }
        Ok(sim)
    }

    pub fn system(&self) -> &ElevatorSystem<Rider> {
        &self.system
    }

    pub fn stats(&self) -> &[RiderStats] {
        &self.stats
    }

    /// Register another rider, before or during the run.
    pub fn add_rider(&mut self, start: Floor, destination: Floor) -> ScenarioResult<ListenerId> {
        let listener = self.system.register_listener(Rider::new(start, destination)?)?;
        self.stats.push(RiderStats {
            listener,
            start,
            destination,
            spawned_at:    self.system.now(),
            waiting_ticks: 0,
            travel_ticks:  0,
            arrived_at:    None,
        });
        Ok(listener)
    }

    /// Start the system.
    pub fn start(&mut self) -> ScenarioResult<()> {
        let report = self.system.ready()?;
        self.record(&report, false);
        Ok(())
    }

    /// One tick, preceded by a rider spawn when one is due.
    pub fn step<O: TickObserver>(&mut self, observer: &mut O) -> ScenarioResult<TickReport> {
        self.spawn_due()?;
        let report = self.system.step(observer)?;
        self.record(&report, true);
        Ok(report)
    }

    /// `true` once every rider arrived, every queue drained and no spawns
    /// are left.
    pub fn is_done(&self) -> bool {
        let spawning = self.spawner.as_ref().is_some_and(|s| s.remaining > 0);
        !spawning && !self.system.has_pending_work()
    }

    /// Start if needed and step until done, bounded by `max_ticks`.
    pub fn run<O: TickObserver>(&mut self, observer: &mut O) -> ScenarioResult<SimulationSummary> {
        if !self.system.is_running() {
            self.start()?;
        }
        let limit = self.system.config().max_ticks;
        while !self.is_done() {
            if self.system.now().0 >= limit {
                return Err(DispatchError::StepLimit(limit).into());
            }
            self.step(observer)?;
        }

        let end = self.system.now();
        observer.on_run_end(end);
        let summary = self.summary();
        info!(
            scenario = %summary.name,
            ticks = summary.ticks,
            arrived = summary.arrived,
            riders = summary.riders,
            "simulation finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> SimulationSummary {
        let riders = self.stats.len();
        let mean = |total: u64| if riders == 0 { 0.0 } else { total as f64 / riders as f64 };
        SimulationSummary {
            name:               self.name.clone(),
            ticks:              self.system.now().0,
            riders,
            arrived:            self.stats.iter().filter(|s| s.arrived_at.is_some()).count(),
            mean_waiting_ticks: mean(self.stats.iter().map(|s| s.waiting_ticks).sum()),
            mean_travel_ticks:  mean(self.stats.iter().map(|s| s.travel_ticks).sum()),
            max_waiting_ticks:  self.stats.iter().map(|s| s.waiting_ticks).max().unwrap_or(0),
            max_travel_ticks:   self.stats.iter().map(|s| s.travel_ticks).max().unwrap_or(0),
            rejected_intents:   self.rejected,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Update rider counters from their placements after `report`.
    /// `count` is `false` for the ready pass, which takes no time.
    fn record(&mut self, report: &TickReport, count: bool) {
        self.rejected += report.rejected.len();
        for stats in self.stats.iter_mut().filter(|s| s.arrived_at.is_none()) {
            match self.system.placement(stats.listener) {
                Some(Placement::Waiting(_)) if count => stats.waiting_ticks += 1,
                Some(Placement::Riding(_)) if count => stats.travel_ticks += 1,
                Some(Placement::Departed | Placement::Stationary) => {
                    stats.arrived_at = Some(report.tick);
                }
                _ => {}
            }
        }
    }

    fn spawn_due(&mut self) -> ScenarioResult<()> {
        let next = self.system.now().0 + 1;
        let due = match self.spawner.as_mut() {
            Some(spawner) if spawner.remaining > 0 && next % spawner.every_ticks == 0 => {
                spawner.remaining -= 1;
                true
            }
            _ => false,
        };
        let Some(building) = self.system.building().filter(|_| due) else {
            return Ok(());
        };

        let start = self.rng.floor_in(building.min, building.max);
        let destination = self.rng.floor_in(building.min, building.max);
        let listener = self.add_rider(start, destination)?;
        debug!(%listener, start, destination, tick = next, "rider spawned");
        Ok(())
    }
}
