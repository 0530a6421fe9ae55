//! Fixed collections of stations and registers.

use std::collections::BTreeMap;

use gs_core::{Car, FuelType, GsError, RegisterConfig, RegisterId, SimRng, StationConfig, StationId};

use crate::dispatch::select_least_loaded;
use crate::server::{Register, Station};
use crate::{SimError, SimResult};

// ── StationPool ───────────────────────────────────────────────────────────────

/// Every station, grouped by fuel type in `FuelType` order.
///
/// `StationId`s are assigned densely across the whole pool, so
/// `pool.get(id)` is a plain index.
pub struct StationPool {
    stations: Vec<Station>,
}

impl StationPool {
    /// Build the pool from per-fuel configuration.  Inverted service bounds
    /// are rejected here with `ConfigValidation`.
    pub fn new(config: &BTreeMap<FuelType, StationConfig>, capacity: usize) -> SimResult<Self> {
        let mut stations = Vec::new();
        for (&fuel, station) in config {
            for _ in 0..station.count {
                let id = StationId::try_from(stations.len()).map_err(|_| {
                    GsError::ConfigValidation("too many stations".into())
                })?;
                stations.push(Station::new(id, fuel, station.service, capacity)?);
            }
        }
        Ok(Self { stations })
    }

    /// Route `car` to the least-loaded station of its fuel type, blocking
    /// while that station's queue is full.
    ///
    /// Returns the chosen station and its queue depth after the push.
    pub fn dispatch(&self, car: Car, rng: &mut SimRng) -> SimResult<(StationId, usize)> {
        let fuel = car.fuel;
        let station = select_least_loaded(&self.stations, |s| s.fuel == fuel, rng)
            .map_err(|_| GsError::NoEligibleServer(format!("no station dispenses {fuel}")))?;
        station.queue().push(car).map_err(|_| SimError::QueueClosed {
            server: station.id.to_string(),
        })?;
        Ok((station.id, station.queue().depth()))
    }

    /// Stop admitting cars at every station.  Queued cars are still served.
    pub fn close(&self) {
        for station in &self.stations {
            station.queue().close();
        }
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

// ── RegisterPool ──────────────────────────────────────────────────────────────

pub struct RegisterPool {
    registers: Vec<Register>,
}

impl RegisterPool {
    /// Inverted handle bounds are rejected with `ConfigValidation`.
    pub fn new(config: &RegisterConfig, capacity: usize) -> SimResult<Self> {
        let registers = (0..config.count)
            .map(|i| Register::new(RegisterId(i), config.handle, capacity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { registers })
    }

    /// Route `car` to the least-loaded register.
    pub fn dispatch(&self, car: Car, rng: &mut SimRng) -> SimResult<(RegisterId, usize)> {
        let register = select_least_loaded(&self.registers, |_| true, rng)?;
        register.queue().push(car).map_err(|_| SimError::QueueClosed {
            server: register.id.to_string(),
        })?;
        Ok((register.id, register.queue().depth()))
    }

    pub fn close(&self) {
        for register in &self.registers {
            register.queue().close();
        }
    }

    pub fn get(&self, id: RegisterId) -> Option<&Register> {
        self.registers.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Register> {
        self.registers.iter()
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}
