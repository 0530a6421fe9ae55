//! Finalized statistics handed to the reporting layer.

use std::time::Duration;

use gs_core::{FuelType, TimingMode};

/// Summary of one statistics key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub total_cars:   u64,
    pub total_time:   Duration,
    /// `None` means "no data": no car was recorded under this key.
    pub average_time: Option<Duration>,
    pub max_time:     Duration,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FuelSummary {
    pub fuel:    FuelType,
    pub summary: Summary,
}

/// Snapshot produced by [`StatsAggregator::finalize`][crate::StatsAggregator::finalize].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsReport {
    pub timing:    TimingMode,
    /// One entry per fuel type in `FuelType::ALL` order, including fuel
    /// types that saw no cars.
    pub fuel:      Vec<FuelSummary>,
    pub registers: Summary,
}

impl StatsReport {
    pub fn fuel(&self, fuel: FuelType) -> &Summary {
        &self.fuel[fuel.index()].summary
    }

    /// Sum of `total_cars` over every fuel type.
    pub fn fuel_total_cars(&self) -> u64 {
        self.fuel.iter().map(|f| f.summary.total_cars).sum()
    }
}
