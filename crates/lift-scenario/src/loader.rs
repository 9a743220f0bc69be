//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per elevator or rider, in registration order:
//!
//! ```csv
//! kind,a,b,c
//! elevator,1,10,5
//! elevator,6,5,10
//! rider,1,7,
//! ```
//!
//! | `kind`     | `a`         | `b`           | `c`           |
//! |------------|-------------|---------------|---------------|
//! | `elevator` | min floor   | floor count   | start floor   |
//! | `rider`    | start floor | destination   | *(empty)*     |
//!
//! Values are only checked for shape here; ranges and floors are validated
//! when the scenario is built into a system.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ElevatorSpec, RiderSpec, ScenarioError, ScenarioResult, ScenarioSpec};

#[derive(Deserialize)]
struct ScenarioRecord {
    kind: String,
    a:    u32,
    b:    u32,
    c:    Option<u32>,
}

/// Load a scenario from a CSV file.  The file stem becomes the name.
pub fn load_scenario_csv(path: &Path) -> ScenarioResult<ScenarioSpec> {
    let file = std::fs::File::open(path)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_scenario_reader(file, name)
}

/// Like [`load_scenario_csv`] but reads from any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R, name: impl Into<String>) -> ScenarioResult<ScenarioSpec> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut spec = ScenarioSpec::new(name);

    for (line, result) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;
        match row.kind.to_ascii_lowercase().as_str() {
            "elevator" => {
                let start_floor = row.c.ok_or_else(|| {
                    ScenarioError::Parse(format!("row {}: elevator needs a start floor", line + 1))
                })?;
                spec.elevators.push(ElevatorSpec {
                    min_floor:   row.a,
                    floor_count: row.b,
                    start_floor,
                });
            }
            "rider" => spec.riders.push(RiderSpec { start: row.a, destination: row.b }),
            other => {
                return Err(ScenarioError::Parse(format!(
                    "row {}: unknown kind {other:?}: expected \"elevator\" or \"rider\"",
                    line + 1
                )));
            }
        }
    }
    Ok(spec)
}
