//! `gs-stats` — timing statistics for the gas station simulation.
//!
//! Register threads call [`StatsAggregator::record`] once per completed car;
//! the coordinator calls [`StatsAggregator::finalize`] after every car has
//! cleared both stages and gets a [`StatsReport`] back.

pub mod aggregate;
pub mod aggregator;
pub mod error;
pub mod report;


pub use aggregate::Aggregate;
pub use aggregator::StatsAggregator;
pub use error::{StatsError, StatsResult};
pub use report::{FuelSummary, StatsReport, Summary};
