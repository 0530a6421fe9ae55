//! Plain data row types written by output backends.
//!
//! Durations are whole microseconds.

use std::time::Duration;

use gs_core::{Car, TimingMode};
use gs_stats::{StatsReport, Summary};

/// One completed car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRow {
    pub car_id:               u32,
    pub fuel:                 &'static str,
    pub station_id:           u32,
    pub station_wait_us:      u64,
    pub station_service_us:   u64,
    pub register_id:          u32,
    pub register_wait_us:     u64,
    pub register_service_us:  u64,
    /// Station plus register time under the run's timing mode.
    pub total_us:             u64,
}

impl CarRow {
    /// `None` if the car has not cleared both stages.
    pub fn from_car(car: &Car, timing: TimingMode) -> Option<Self> {
        let station = car.station?;
        let register = car.register?;
        Some(Self {
            car_id:              car.id.0,
            fuel:                car.fuel.as_str(),
            station_id:          car.station_id.0,
            station_wait_us:     micros(station.queue_wait()),
            station_service_us:  micros(station.service),
            register_id:         car.register_id.0,
            register_wait_us:    micros(register.queue_wait()),
            register_service_us: micros(register.service),
            total_us:            micros(station.time(timing) + register.time(timing)),
        })
    }
}

/// One statistics key from the finalized report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Fuel type name, or `"registers"`.
    pub key:           &'static str,
    pub total_cars:    u64,
    pub total_time_us: u64,
    /// `None` when no car was recorded under this key.
    pub average_us:    Option<u64>,
    pub max_us:        u64,
}

impl SummaryRow {
    fn new(key: &'static str, summary: &Summary) -> Self {
        Self {
            key,
            total_cars:    summary.total_cars,
            total_time_us: micros(summary.total_time),
            average_us:    summary.average_time.map(micros),
            max_us:        micros(summary.max_time),
        }
    }

    /// One row per fuel type followed by the register row.
    pub fn from_report(report: &StatsReport) -> Vec<Self> {
        report
            .fuel
            .iter()
            .map(|f| Self::new(f.fuel.as_str(), &f.summary))
            .chain(std::iter::once(Self::new("registers", &report.registers)))
            .collect()
    }
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
