//! The unit of work flowing through the two-stage pipeline.

use std::time::{Duration, Instant};

use crate::{CarId, FuelType, RegisterId, StationId, TimingMode};

/// Timestamps for one car at one stage (station or register).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StageRecord {
    /// When the car was handed to this stage's dispatch.
    pub arrived_at: Instant,
    /// When the server dequeued the car.
    pub started_at: Instant,
    /// When the server finished with the car.
    pub ended_at:   Instant,
    /// The sampled service duration the server slept for.
    pub service:    Duration,
}

impl StageRecord {
    /// Time spent queued before service started.
    #[inline]
    pub fn queue_wait(&self) -> Duration {
        self.started_at.saturating_duration_since(self.arrived_at)
    }

    /// The time this stage contributes to statistics under `mode`.
    #[inline]
    pub fn time(&self, mode: TimingMode) -> Duration {
        if mode.includes_queue_wait() {
            self.service + self.queue_wait()
        } else {
            self.service
        }
    }
}

/// One simulated car.
///
/// A `Car` is moved by value through the server queues, so the stage that
/// currently holds it is its only writer.
#[derive(Clone, Debug)]
pub struct Car {
    pub id:            CarId,
    pub fuel:          FuelType,
    /// Arrival time at the stage currently holding the car.  Overwritten by
    /// the station just before the car is handed to a register.
    pub stage_arrival: Instant,
    /// `StationId::INVALID` until a station has served the car.
    pub station_id:    StationId,
    /// `RegisterId::INVALID` until a register has served the car.
    pub register_id:   RegisterId,
    pub station:       Option<StageRecord>,
    pub register:      Option<StageRecord>,
}

impl Car {
    pub fn new(id: CarId, fuel: FuelType, arrived_at: Instant) -> Self {
        Self {
            id,
            fuel,
            stage_arrival: arrived_at,
            station_id:    StationId::INVALID,
            register_id:   RegisterId::INVALID,
            station:       None,
            register:      None,
        }
    }

    /// `true` once both stages have served the car.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.station.is_some() && self.register.is_some()
    }

    /// Station time plus register time under `mode`, or `None` if the car
    /// has not cleared both stages.
    pub fn total_time(&self, mode: TimingMode) -> Option<Duration> {
        Some(self.station?.time(mode) + self.register?.time(mode))
    }
}
