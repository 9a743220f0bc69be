//! `lift-output` — run recording for the lift_sim workspace.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `elevator_positions.csv`, `tick_summaries.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `lift_dispatch::TickObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, OutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = OutputObserver::new(writer);
//! system.run_until_idle(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{ElevatorPositionRow, TickSummaryRow};
pub use writer::OutputWriter;
