//! Stations, registers, and their service loops.
//!
//! # Service loop
//!
//! ```text
//! Idle ──car dequeued──▶ Serving ──sleep(sampled)──▶ Idle
//!   │
//!   └──queue closed──▶ Draining (serve what is left) ──▶ Stopped
//! ```
//!
//! Each loop runs on its own thread and is the only consumer of its queue,
//! so a server serves its cars strictly in the order they were queued.

use std::thread;
use std::time::Instant;

use crossbeam::channel::Sender;
use gs_core::{
    Car, CheckedRange, FuelType, GsResult, MillisRange, RegisterId, SimRng, StageRecord, StationId,
};
use gs_stats::StatsAggregator;
use tracing::{debug, error};

use crate::counter::WorkCounter;
use crate::dispatch::QueueDepth;
use crate::observer::SimEvent;
use crate::pool::RegisterPool;
use crate::queue::WorkQueue;

// ── Station ───────────────────────────────────────────────────────────────────

/// A fuel-type-specific server for the refueling stage.
pub struct Station {
    pub id:      StationId,
    pub fuel:    FuelType,
    pub service: CheckedRange,
    queue:       WorkQueue,
}

impl Station {
    /// Fails with `ConfigValidation` if `service` is inverted.
    pub fn new(
        id:       StationId,
        fuel:     FuelType,
        service:  MillisRange,
        capacity: usize,
    ) -> GsResult<Self> {
        let service = service.checked(&format!("stations.{fuel}.service"))?;
        Ok(Self { id, fuel, service, queue: WorkQueue::new(capacity) })
    }

    pub fn queue(&self) -> &WorkQueue {
        &self.queue
    }
}

impl QueueDepth for Station {
    #[inline]
    fn queue_depth(&self) -> usize {
        self.queue.depth()
    }
}

// ── Register ──────────────────────────────────────────────────────────────────

/// A type-agnostic server for the payment stage.
pub struct Register {
    pub id:     RegisterId,
    pub handle: CheckedRange,
    queue:      WorkQueue,
}

impl Register {
    /// Fails with `ConfigValidation` if `handle` is inverted.
    pub fn new(id: RegisterId, handle: MillisRange, capacity: usize) -> GsResult<Self> {
        let handle = handle.checked("registers.handle")?;
        Ok(Self { id, handle, queue: WorkQueue::new(capacity) })
    }

    pub fn queue(&self) -> &WorkQueue {
        &self.queue
    }
}

impl QueueDepth for Register {
    #[inline]
    fn queue_depth(&self) -> usize {
        self.queue.depth()
    }
}

// ── Service loops ─────────────────────────────────────────────────────────────

/// Drain `queue` until it is closed and empty, sleeping a sampled duration
/// per car and handing each served car to `on_served`.
fn serve<F>(queue: &WorkQueue, bounds: CheckedRange, rng: &mut SimRng, mut on_served: F)
where
    F: FnMut(Car, StageRecord, &mut SimRng),
{
    for car in queue.consumer().iter() {
        let started_at = Instant::now();
        let service = rng.sample_duration(bounds);
        thread::sleep(service);

        let record = StageRecord {
            arrived_at: car.stage_arrival,
            started_at,
            ended_at: Instant::now(),
            service,
        };
        on_served(car, record, rng);
    }
}

/// Station loop: serve, then forward each car to the least-loaded register.
pub(crate) fn run_station(
    station:   &Station,
    mut rng:   SimRng,
    registers: &RegisterPool,
    counter:   &WorkCounter,
    events:    Sender<SimEvent>,
) {
    serve(&station.queue, station.service, &mut rng, |mut car, record, rng| {
        debug!(car = %car.id, station = %station.id, fuel = %car.fuel,
               wait = ?record.queue_wait(), service = ?record.service, "station served car");

        car.station_id = station.id;
        car.station = Some(record);
        car.stage_arrival = Instant::now();

        let id = car.id;
        match registers.dispatch(car, rng) {
            Ok((register, depth)) => {
                let _ = events.send(SimEvent::Forwarded { car: id, register, depth });
            }
            Err(e) => {
                // Queues close early only after an arrival-thread panic.
                // Release the unit so the run still ends.
                error!(car = %id, station = %station.id, error = %e, "car dropped at register hand-off");
                counter.done();
            }
        }
    });
    debug!(station = %station.id, "station stopped");
}

/// Register loop: serve, account, and release one unit of outstanding work
/// per car.
pub(crate) fn run_register(
    register: &Register,
    mut rng:  SimRng,
    stats:    &StatsAggregator,
    counter:  &WorkCounter,
    events:   Sender<SimEvent>,
) {
    serve(&register.queue, register.handle, &mut rng, |mut car, record, _rng| {
        debug!(car = %car.id, register = %register.id,
               wait = ?record.queue_wait(), service = ?record.service, "register served car");

        car.register_id = register.id;
        car.register = Some(record);

        if let Err(e) = stats.record(&car) {
            error!(car = %car.id, error = %e, "car not accounted");
        }
        let _ = events.send(SimEvent::Completed(car));
        counter.done();
    });
    debug!(register = %register.id, "register stopped");
}
