//! Top-level simulation configuration.
//!
//! Typically produced by [`crate::loader`] from a TOML file and passed to the
//! simulation builder.  The engine only reads it.

use std::collections::BTreeMap;

use crate::{FuelType, GsError, GsResult, MillisRange, TimingMode};

/// Queue depth of every station and register when not configured.
pub const DEFAULT_QUEUE_CAPACITY: usize = 20;

/// Root seed when not configured.
pub const DEFAULT_SEED: u64 = 42;

/// Car arrival stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarConfig {
    /// Total cars to generate.  Must be positive.
    pub count:   u32,
    /// Pause between consecutive arrivals.
    pub arrival: MillisRange,
}

/// Stations dispensing one fuel type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationConfig {
    /// Number of stations of this fuel type.  Must be positive.
    pub count:   u32,
    pub service: MillisRange,
}

/// Payment registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterConfig {
    /// Must be positive.
    pub count:  u32,
    pub handle: MillisRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    pub cars:      CarConfig,
    /// Stations keyed by fuel type.  Every fuel type needs an entry, since
    /// arriving cars draw their fuel type from all of them.
    pub stations:  BTreeMap<FuelType, StationConfig>,
    pub registers: RegisterConfig,

    /// Master RNG seed.
    pub seed:           u64,
    /// Bounded depth of every server queue.  A full queue blocks the
    /// dispatching side until the server drains an item.
    pub queue_capacity: usize,
    /// Whether queue wait counts towards reported stage times.
    pub timing:         TimingMode,
}

impl SimConfig {
    /// Build a configuration with default seed, queue capacity and timing.
    pub fn new(
        cars:      CarConfig,
        stations:  BTreeMap<FuelType, StationConfig>,
        registers: RegisterConfig,
    ) -> Self {
        Self {
            cars,
            stations,
            registers,
            seed:           DEFAULT_SEED,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            timing:         TimingMode::default(),
        }
    }

    /// Check every count and bound.
    ///
    /// Must pass before any worker thread is started.  Inverted bounds and
    /// non-positive counts are [`GsError::ConfigValidation`].  Arriving cars
    /// may request any fuel type, so a fuel type in [`FuelType::ALL`] without
    /// a station entry is [`GsError::NoEligibleServer`].
    pub fn validate(&self) -> GsResult<()> {
        if self.cars.count == 0 {
            return Err(GsError::ConfigValidation("cars.count must be positive".into()));
        }
        self.cars.arrival.validate("cars.arrival")?;

        for (fuel, station) in &self.stations {
            if station.count == 0 {
                return Err(GsError::ConfigValidation(format!(
                    "stations.{fuel}.count must be positive"
                )));
            }
            station.service.validate(&format!("stations.{fuel}.service"))?;
        }
        if let Some(fuel) = FuelType::ALL.into_iter().find(|f| !self.stations.contains_key(f)) {
            return Err(GsError::NoEligibleServer(format!("no station dispenses {fuel}")));
        }

        if self.registers.count == 0 {
            return Err(GsError::ConfigValidation("registers.count must be positive".into()));
        }
        self.registers.handle.validate("registers.handle")?;

        if self.queue_capacity == 0 {
            return Err(GsError::ConfigValidation("queue_capacity must be positive".into()));
        }
        Ok(())
    }
}
