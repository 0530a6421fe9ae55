//! `gs-output` — result output for the gas station simulation.
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | `row`      | `CarRow`, `SummaryRow` plain data types           |
//! | `writer`   | `OutputWriter` backend trait                      |
//! | `csv`      | `CsvWriter`: `cars.csv` and `summary.csv`         |
//! | `observer` | `SimOutputObserver<W>`: `SimObserver` → writer    |
//! | `report`   | `render_config`, `render_report` text dumps       |
//!
//! # Usage
//!
//! ```rust,ignore
//! let writer = CsvWriter::new(Path::new("out"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.config.timing);
//! let report = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! println!("{}", render_report(&report));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::{render_config, render_report};
pub use row::{CarRow, SummaryRow};
pub use writer::OutputWriter;
