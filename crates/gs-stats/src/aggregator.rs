//! Concurrent statistics aggregator.

use gs_core::{Car, FuelType, TimingMode};
use parking_lot::Mutex;

use crate::{Aggregate, FuelSummary, StatsError, StatsReport, StatsResult};

/// Collects completed cars from every register thread.
///
/// Each key (one per fuel type, one for registers) sits behind its own
/// mutex, so two registers completing cars of different fuel types only
/// contend on the register key.
pub struct StatsAggregator {
    timing:    TimingMode,
    fuel:      [Mutex<Aggregate>; FuelType::COUNT],
    registers: Mutex<Aggregate>,
}

impl StatsAggregator {
    pub fn new(timing: TimingMode) -> Self {
        Self {
            timing,
            fuel:      std::array::from_fn(|_| Mutex::new(Aggregate::default())),
            registers: Mutex::new(Aggregate::default()),
        }
    }

    pub fn timing(&self) -> TimingMode {
        self.timing
    }

    /// Account one completed car.  Must be called exactly once per car.
    ///
    /// The fuel key receives the station stage time and the register key the
    /// register stage time, each with or without queue wait per the
    /// aggregator's [`TimingMode`].
    pub fn record(&self, car: &Car) -> StatsResult<()> {
        let (Some(station), Some(register)) = (car.station, car.register) else {
            return Err(StatsError::IncompleteCar(car.id));
        };
        self.fuel[car.fuel.index()].lock().add(station.time(self.timing));
        self.registers.lock().add(register.time(self.timing));
        Ok(())
    }

    /// Snapshot every key and compute means.
    pub fn finalize(&self) -> StatsReport {
        StatsReport {
            timing:    self.timing,
            fuel:      FuelType::ALL
                .into_iter()
                .map(|fuel| FuelSummary {
                    fuel,
                    summary: self.fuel[fuel.index()].lock().summary(),
                })
                .collect(),
            registers: self.registers.lock().summary(),
        }
    }
}
