//! The `OutputWriter` trait implemented by backend writers.

use crate::{CarRow, OutputResult, SummaryRow};

/// Sink for per-car records and the final summary.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    fn write_car(&mut self, row: &CarRow) -> OutputResult<()>;

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
