//! The closed set of fuel types a station can dispense.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GsError;

/// Fuel type required by a car and dispensed by a station.
///
/// Adding a variant is a compile-time-checked change: `ALL`, `index`, and the
/// per-fuel arrays in the statistics crate all match exhaustively.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gas,
    Diesel,
    Lpg,
    Electric,
}

impl FuelType {
    /// Every fuel type, in index order.
    pub const ALL: [FuelType; 4] = [
        FuelType::Gas,
        FuelType::Diesel,
        FuelType::Lpg,
        FuelType::Electric,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..COUNT`, for per-fuel arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            FuelType::Gas      => 0,
            FuelType::Diesel   => 1,
            FuelType::Lpg      => 2,
            FuelType::Electric => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Gas      => "gas",
            FuelType::Diesel   => "diesel",
            FuelType::Lpg      => "lpg",
            FuelType::Electric => "electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = GsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GsError::Parse(format!("unknown fuel type {s:?}")))
    }
}
