//! The `Sim` coordinator and its run loop.

use std::thread::{self, ScopedJoinHandle};
use std::time::Instant;

use crossbeam::channel::{self, Sender};
use gs_core::{Car, CarConfig, CarId, SimConfig, SimRng};
use gs_stats::{StatsAggregator, StatsReport};
use tracing::{debug, error, info};

use crate::counter::WorkCounter;
use crate::observer::SimEvent;
use crate::pool::{RegisterPool, StationPool};
use crate::server::{run_register, run_station};
use crate::{SimError, SimObserver, SimPhase, SimResult};

/// The simulation coordinator.
///
/// Owns both server pools and the statistics aggregator.  [`Sim::run`]
/// drives one complete simulation:
///
/// 1. **Running**: start one thread per station and per register, then the
///    arrival generator, which creates `cars.count` cars, routes each to the
///    least-loaded station of its fuel type, and pauses a sampled interval
///    between cars.
/// 2. **Draining**: once every car is issued, wait for the outstanding-work
///    counter to reach zero, then close every station queue and every
///    register queue.
/// 3. **Completed**: all loops have exited; statistics are finalized.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated configuration, including any builder overrides.
    pub config: SimConfig,

    /// Root generator; every thread gets a child of it.
    pub(crate) rng: SimRng,

    pub(crate) stats:     StatsAggregator,
    pub(crate) phase:     SimPhase,
    pub(crate) stations:  StationPool,
    pub(crate) registers: RegisterPool,
}

impl Sim {
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn stations(&self) -> &StationPool {
        &self.stations
    }

    pub fn registers(&self) -> &RegisterPool {
        &self.registers
    }

    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    /// Run the simulation to completion and return the finalized statistics.
    ///
    /// Blocks the calling thread until every car has cleared both stages.
    /// Observer callbacks are delivered on a dedicated event thread (see
    /// [`SimObserver`]); use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need them.
    ///
    /// A `Sim` runs once; a second call returns [`SimError::AlreadyRun`].
    pub fn run<O: SimObserver + Send>(&mut self, observer: &mut O) -> SimResult<StatsReport> {
        if self.phase != SimPhase::Initializing {
            return Err(SimError::AlreadyRun);
        }
        let Sim { config, rng, stats, phase, stations, registers } = self;

        // Seed offsets: 0 for arrivals, then stations, then registers.
        let arrival_rng = rng.child(0);
        let station_rngs: Vec<SimRng> = (0..stations.len())
            .map(|i| rng.child(1 + i as u64))
            .collect();
        let register_rngs: Vec<SimRng> = (0..registers.len())
            .map(|i| rng.child(1 + (stations.len() + i) as u64))
            .collect();

        let counter = WorkCounter::new();
        let (events_tx, events_rx) = channel::unbounded::<SimEvent>();
        let started = Instant::now();

        let admitted = thread::scope(|s| {
            let counter   = &counter;
            let stations  = &*stations;
            let registers = &*registers;
            let stats     = &*stats;
            let observer  = &mut *observer;

            s.spawn(move || {
                for event in events_rx {
                    event.deliver(observer);
                }
            });

            for (register, rng) in registers.iter().zip(register_rngs) {
                let events = events_tx.clone();
                s.spawn(move || run_register(register, rng, stats, counter, events));
            }
            for (station, rng) in stations.iter().zip(station_rngs) {
                let events = events_tx.clone();
                s.spawn(move || run_station(station, rng, registers, counter, events));
            }

            enter(phase, SimPhase::Running, &events_tx);
            let arrivals = {
                let events = events_tx.clone();
                let cars   = &config.cars;
                s.spawn(move || generate_arrivals(cars, stations, arrival_rng, counter, events))
            };
            let admitted = join_arrivals(arrivals, stations, registers);

            enter(phase, SimPhase::Draining, &events_tx);
            counter.wait_zero();

            // Nothing is in flight, so no dispatch can race the close.
            stations.close();
            registers.close();
            drop(events_tx);
            admitted
        });

        *phase = SimPhase::Completed;
        observer.on_phase(SimPhase::Completed);
        let report = stats.finalize();
        info!(
            cars    = report.registers.total_cars,
            elapsed = ?started.elapsed(),
            "simulation completed"
        );

        let admitted = admitted?;
        debug!(admitted, "all admitted cars accounted");
        observer.on_sim_end(&report);
        Ok(report)
    }
}

/// Join the arrival thread.  If it panicked, close every queue first so the
/// service threads drain and exit, then re-raise the panic; the enclosing
/// scope would otherwise wait on them forever.
pub(crate) fn join_arrivals(
    handle:    ScopedJoinHandle<'_, SimResult<u32>>,
    stations:  &StationPool,
    registers: &RegisterPool,
) -> SimResult<u32> {
    match handle.join() {
        Ok(result) => result,
        Err(panic) => {
            error!("arrival generator panicked, closing all queues");
            stations.close();
            registers.close();
            std::panic::resume_unwind(panic)
        }
    }
}

fn enter(phase: &mut SimPhase, next: SimPhase, events: &Sender<SimEvent>) {
    *phase = next;
    info!(phase = %next, "simulation phase");
    let _ = events.send(SimEvent::Phase(next));
}

/// Arrival generator: create, admit, pause, repeat.
///
/// Each car takes one unit of outstanding work before it is routed.  If the
/// routing fails the unit is released again before the error propagates, so
/// the coordinator's wait for zero still terminates.
fn generate_arrivals(
    cars:     &CarConfig,
    stations: &StationPool,
    mut rng:  SimRng,
    counter:  &WorkCounter,
    events:   Sender<SimEvent>,
) -> SimResult<u32> {
    let arrival = cars.arrival.checked("cars.arrival")?;
    for i in 0..cars.count {
        let fuel = rng.sample_fuel_type();
        let car = Car::new(CarId(i), fuel, Instant::now());

        counter.add();
        match stations.dispatch(car, &mut rng) {
            Ok((station, depth)) => {
                debug!(car = i, %fuel, %station, depth, "car admitted");
                let _ = events.send(SimEvent::Admitted { car: CarId(i), fuel, station, depth });
            }
            Err(e) => {
                counter.done();
                return Err(e);
            }
        }

        if i + 1 < cars.count {
            thread::sleep(rng.sample_duration(arrival));
        }
    }
    Ok(cars.count)
}
