//! TOML configuration loader.
//!
//! # File format
//!
//! ```toml
//! seed = 42                  # optional, default 42
//! queue_capacity = 20        # optional, default 20
//! timing = "service_only"    # or "include_queue_wait"
//!
//! [cars]
//! count = 100
//! arrival_time_min = "1ms"
//! arrival_time_max = "5ms"
//!
//! [stations.gas]
//! count = 2
//! serve_time_min = "2ms"
//! serve_time_max = "5ms"
//!
//! [stations.diesel]
//! count = 1
//! serve_time_min = "1.5ms"
//! serve_time_max = 4
//!
//! [stations.lpg]
//! count = 1
//! serve_time_min = "2ms"
//! serve_time_max = "6ms"
//!
//! [stations.electric]
//! count = 1
//! serve_time_min = "3ms"
//! serve_time_max = "1s500ms"
//!
//! [registers]
//! count = 2
//! handle_time_min = "1ms"
//! handle_time_max = "3ms"
//! ```
//!
//! Durations are bare integers (milliseconds) or strings of `<number><unit>`
//! terms with units `ns`, `us`, `ms`, `s`, `m`, `h` (see
//! [`parse_millis`][crate::time::parse_millis]); they resolve to whole
//! milliseconds.  Station tables are keyed by fuel type: `gas`, `diesel`,
//! `lpg`, `electric`.  Validation requires a table for each of them.
//!
//! Loading only parses; call [`SimConfig::validate`] (the simulation builder
//! does) to check counts and bounds.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::{DEFAULT_QUEUE_CAPACITY, DEFAULT_SEED};
use crate::time::parse_millis;
use crate::{
    CarConfig, FuelType, GsError, GsResult, MillisRange, RegisterConfig, SimConfig, StationConfig,
    TimingMode,
};

// ── Raw records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Millis(u64),
    Text(String),
}

impl RawDuration {
    fn millis(&self) -> GsResult<u64> {
        match self {
            RawDuration::Millis(ms) => Ok(*ms),
            RawDuration::Text(s)    => parse_millis(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCars {
    count:            u32,
    arrival_time_min: RawDuration,
    arrival_time_max: RawDuration,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStation {
    count:          u32,
    serve_time_min: RawDuration,
    serve_time_max: RawDuration,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegisters {
    count:           u32,
    handle_time_min: RawDuration,
    handle_time_max: RawDuration,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    cars:           RawCars,
    /// Keyed by fuel type name; parsed with `FuelType::from_str`.
    stations:       BTreeMap<String, RawStation>,
    registers:      RawRegisters,
    seed:           Option<u64>,
    queue_capacity: Option<usize>,
    timing:         Option<TimingMode>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`SimConfig`] from a TOML file.
pub fn load_config_path(path: &Path) -> GsResult<SimConfig> {
    let text = std::fs::read_to_string(path)?;
    load_config_str(&text)
}

/// Like [`load_config_path`] but parses an in-memory string.
pub fn load_config_str(text: &str) -> GsResult<SimConfig> {
    let raw: RawConfig = toml::from_str(text).map_err(|e| GsError::Parse(e.to_string()))?;

    let stations = raw
        .stations
        .into_iter()
        .map(|(name, s)| {
            Ok((
                name.parse::<FuelType>()?,
                StationConfig {
                    count:   s.count,
                    service: range(&s.serve_time_min, &s.serve_time_max)?,
                },
            ))
        })
        .collect::<GsResult<BTreeMap<_, _>>>()?;

    Ok(SimConfig {
        cars: CarConfig {
            count:   raw.cars.count,
            arrival: range(&raw.cars.arrival_time_min, &raw.cars.arrival_time_max)?,
        },
        stations,
        registers: RegisterConfig {
            count:  raw.registers.count,
            handle: range(&raw.registers.handle_time_min, &raw.registers.handle_time_max)?,
        },
        seed:           raw.seed.unwrap_or(DEFAULT_SEED),
        queue_capacity: raw.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY),
        timing:         raw.timing.unwrap_or_default(),
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn range(min: &RawDuration, max: &RawDuration) -> GsResult<MillisRange> {
    Ok(MillisRange::new(min.millis()?, max.millis()?))
}
