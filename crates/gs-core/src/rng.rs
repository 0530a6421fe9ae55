//! Deterministic, thread-local sampling.
//!
//! # Determinism strategy
//!
//! The simulation holds one root `SimRng` seeded from the configuration.
//! Every worker thread (each station, each register, the arrival generator)
//! receives its own child generator derived from the root:
//!
//!   child_seed = root.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! Workers never share generator state, so sampling needs no locking and the
//! per-worker streams are reproducible for a given seed.  Wall-clock
//! interleaving between threads is of course not reproducible.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{CheckedRange, FuelType, GsError, GsResult, MillisRange};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded generator owned by exactly one thread.
///
/// `SimRng` is `Send` but deliberately not shared: hand each thread its own
/// via [`SimRng::child`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, for seeding
    /// per-thread generators deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// A fuel type drawn uniformly from [`FuelType::ALL`].
    #[inline]
    pub fn sample_fuel_type(&mut self) -> FuelType {
        FuelType::ALL[self.0.gen_range(0..FuelType::COUNT)]
    }

    /// An integer uniformly distributed over the inclusive `[min, max]`.
    ///
    /// Returns `min` without touching the generator when the bounds are
    /// equal, and [`GsError::InvalidRange`] when `min > max`.
    pub fn sample_millis(&mut self, min: u64, max: u64) -> GsResult<u64> {
        if min > max {
            return Err(GsError::InvalidRange { min, max });
        }
        if min == max {
            return Ok(min);
        }
        Ok(self.0.gen_range(min..=max))
    }

    /// A `Duration` of whole milliseconds drawn from checked bounds.
    pub fn sample_duration(&mut self, range: CheckedRange) -> Duration {
        let MillisRange { min_ms, max_ms } = range.bounds();
        let ms = if min_ms == max_ms { min_ms } else { self.0.gen_range(min_ms..=max_ms) };
        Duration::from_millis(ms)
    }

    /// Uniform index in `0..len`.  `len` must be non-zero.
    #[inline]
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
