//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cars.csv`: one row per completed car, in completion order
//! - `summary.csv`: one row per fuel type plus one for registers

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarRow, OutputResult, SummaryRow};

pub const CAR_HEADERS: [&str; 9] = [
    "car_id",
    "fuel",
    "station_id",
    "station_wait_us",
    "station_service_us",
    "register_id",
    "register_wait_us",
    "register_service_us",
    "total_us",
];

pub const SUMMARY_HEADERS: [&str; 5] = ["key", "total_cars", "total_time_us", "average_us", "max_us"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    cars:     Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut cars = Writer::from_path(dir.join("cars.csv"))?;
        cars.write_record(CAR_HEADERS)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(SUMMARY_HEADERS)?;

        Ok(Self { cars, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_car(&mut self, row: &CarRow) -> OutputResult<()> {
        self.cars.write_record(&[
            row.car_id.to_string(),
            row.fuel.to_string(),
            row.station_id.to_string(),
            row.station_wait_us.to_string(),
            row.station_service_us.to_string(),
            row.register_id.to_string(),
            row.register_wait_us.to_string(),
            row.register_service_us.to_string(),
            row.total_us.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[
                row.key.to_string(),
                row.total_cars.to_string(),
                row.total_time_us.to_string(),
                // Empty field means "no data".
                row.average_us.map(|v| v.to_string()).unwrap_or_default(),
                row.max_us.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.cars.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
