//! basic — runs one elevator scenario and prints what happened.
//!
//! ```text
//! basic [SCENARIO] [CONFIG_JSON] [OUTPUT_DIR]
//! ```
//!
//! `SCENARIO` is a preset name, `random`, or the path of a scenario CSV
//! (`kind,a,b,c` rows).  `CONFIG_JSON` is an optional `SystemConfig` file;
//! missing fields keep their defaults.  Positions and tick summaries are
//! written as CSV under `OUTPUT_DIR` (default `output/basic`).
//!
//! Set `RUST_LOG=debug` to watch queue mutations and assignments.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::SystemConfig;
use lift_output::{CsvWriter, OutputObserver};
use lift_scenario::{ScenarioSpec, Simulation, load_scenario_csv, presets, random_scenario};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SCENARIO: &str = "simple";
const DEFAULT_OUTPUT:   &str = "output/basic";

// Size of the `random` scenario.
const RANDOM_ELEVATORS: usize = 4;
const RANDOM_RIDERS:    usize = 200;
const RANDOM_FLOORS:    u32   = 20;

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    scenario: String,
    config:   Option<PathBuf>,
    output:   PathBuf,
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    Args {
        scenario: args.next().unwrap_or_else(|| DEFAULT_SCENARIO.to_owned()),
        config:   args.next().map(PathBuf::from),
        output:   args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from),
    }
}

fn load_config(path: Option<&Path>) -> Result<SystemConfig> {
    let Some(path) = path else {
        return Ok(SystemConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SystemConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn load_scenario(name: &str, config: &SystemConfig) -> Result<ScenarioSpec> {
    if name == "random" {
        return Ok(random_scenario(config.seed, RANDOM_ELEVATORS, RANDOM_RIDERS, RANDOM_FLOORS));
    }
    if let Some(spec) = presets::by_name(name) {
        return Ok(spec);
    }
    let path = Path::new(name);
    if path.extension().is_some_and(|ext| ext == "csv") {
        return Ok(load_scenario_csv(path)?);
    }
    let known: Vec<String> = presets::all().into_iter().map(|spec| spec.name).collect();
    bail!("unknown scenario {name:?}; expected a CSV path, `random` or one of {known:?}")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args();
    let config = load_config(args.config.as_deref())?;

    if let Some(threads) = config.num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the rayon pool")?;
    }

    // 1. Scenario.
    let spec = load_scenario(&args.scenario, &config)?;
    println!("=== basic — lift_sim elevator dispatch ===");
    println!(
        "Scenario: {}  |  Elevators: {}  |  Riders: {}  |  Seed: {}",
        spec.name,
        spec.elevators.len(),
        spec.riders.len(),
        config.seed
    );
    println!();

    // 2. Build the system.
    let mut sim = Simulation::new(&spec, config)?;
    if let Some(building) = sim.system().building() {
        info!(min = building.min, max = building.max, "building assembled");
    }

    // 3. Output.
    let writer = CsvWriter::new(&args.output)?;
    let mut obs = OutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    let summary = match outcome {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("run aborted: {e}");
            obs.finish()?;
            sim.summary()
        }
    };

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("{summary}");
    println!("  output          {}", args.output.display());
    println!();

    // 6. Final elevator positions.
    println!("{:<10} {:<7} {:<9} {:<7} {:<10}", "Elevator", "Floor", "Range", "Stops", "Passengers");
    println!("{}", "-".repeat(47));
    for snap in sim.system().snapshots() {
        println!(
            "{:<10} {:<7} {:<9} {:<7} {:<10}",
            snap.elevator.0,
            snap.floor,
            format!("{}-{}", snap.range.min, snap.range.max),
            snap.stops.len(),
            snap.passengers,
        );
    }

    Ok(())
}
