//! `gs-core` — foundational types for the gas station simulation.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `CarId`, `StationId`, `RegisterId`                         |
//! | [`fuel`]   | `FuelType` closed enum                                     |
//! | [`car`]    | `Car`, `StageRecord`                                       |
//! | [`time`]   | `MillisRange`, `CheckedRange`, `TimingMode`, durations     |
//! | [`rng`]    | `SimRng` (per-thread, seeded)                              |
//! | [`config`] | `SimConfig` and its sections, validation                   |
//! | [`loader`] | TOML loading into `SimConfig`                              |
//! | [`error`]  | `GsError`, `GsResult`                                      |

pub mod car;
pub mod config;
pub mod error;
pub mod fuel;
pub mod ids;
pub mod loader;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Car, StageRecord};
pub use config::{CarConfig, RegisterConfig, SimConfig, StationConfig};
pub use error::{GsError, GsResult};
pub use fuel::FuelType;
pub use ids::{CarId, RegisterId, StationId};
pub use loader::{load_config_path, load_config_str};
pub use rng::SimRng;
pub use time::{CheckedRange, MillisRange, TimingMode};
