//! Fluent builder for constructing a [`Sim`].

use gs_core::{SimConfig, SimRng, TimingMode};
use gs_stats::StatsAggregator;
use tracing::debug;

use crate::pool::{RegisterPool, StationPool};
use crate::{Sim, SimPhase, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional overrides
///
/// | Method                | Default                       |
/// |-----------------------|-------------------------------|
/// | `.seed(s)`            | `config.seed`                 |
/// | `.queue_capacity(n)`  | `config.queue_capacity`       |
/// | `.timing(m)`          | `config.timing`               |
///
/// # Example
///
/// ```rust,ignore
/// let config = gs_core::load_config_path(path)?;
/// let mut sim = SimBuilder::new(config).seed(7).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    pub fn timing(mut self, timing: TimingMode) -> Self {
        self.config.timing = timing;
        self
    }

    /// Validate the configuration and construct both pools.
    ///
    /// No thread is started here; every configuration error surfaces before
    /// [`Sim::run`] can spawn anything.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let stations = StationPool::new(&config.stations, config.queue_capacity)?;
        let registers = RegisterPool::new(&config.registers, config.queue_capacity)?;
        debug!(
            stations  = stations.len(),
            registers = registers.len(),
            capacity  = config.queue_capacity,
            "built server pools"
        );

        Ok(Sim {
            rng: SimRng::new(config.seed),
            stats: StatsAggregator::new(config.timing),
            phase: SimPhase::Initializing,
            stations,
            registers,
            config,
        })
    }
}
