//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use gs_core::{Car, TimingMode};
use gs_sim::SimObserver;
use gs_stats::StatsReport;
use tracing::warn;

use crate::row::{CarRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per completed car and the final
/// summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    timing:     TimingMode,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// `timing` must match the run's timing mode so that `total_us` agrees
    /// with the report.
    pub fn new(writer: W, timing: TimingMode) -> Self {
        Self { writer, timing, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of car rows written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_car_completed(&mut self, car: &Car) {
        let Some(row) = CarRow::from_car(car, self.timing) else {
            warn!(car = %car.id, "completed car is missing a stage record");
            return;
        };
        let result = self.writer.write_car(&row);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, report: &StatsReport) {
        let rows = SummaryRow::from_report(report);
        let result = self.writer.write_summary(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
