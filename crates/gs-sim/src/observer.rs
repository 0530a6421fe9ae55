//! Simulation observer trait for progress reporting and data collection.

use std::fmt;

use gs_core::{Car, CarId, FuelType, RegisterId, StationId};
use gs_stats::StatsReport;

/// Coordinator lifecycle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SimPhase {
    /// Built and validated; no thread started yet.
    Initializing,
    /// Server loops started; arrivals in flight.
    Running,
    /// Every arrival issued; waiting for outstanding cars to clear.
    Draining,
    /// Queues closed, loops joined, statistics finalized.
    Completed,
}

impl fmt::Display for SimPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimPhase::Initializing => "initializing",
            SimPhase::Running      => "running",
            SimPhase::Draining     => "draining",
            SimPhase::Completed    => "completed",
        };
        f.write_str(name)
    }
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// Every callback except [`on_sim_end`][Self::on_sim_end] is delivered on a
/// single dedicated event thread, in the order the events were emitted by
/// the worker threads; the observer therefore needs `Send` but never sees
/// concurrent calls.  All methods default to no-ops.
///
/// Events from different threads interleave: with very short service times
/// a car's `on_car_forwarded` can be delivered before its `on_car_admitted`.
/// Completions are always delivered before `Completed` is reported.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress { done: usize }
///
/// impl SimObserver for Progress {
///     fn on_car_completed(&mut self, car: &Car) {
///         self.done += 1;
///         println!("{} done ({} so far)", car.id, self.done);
///     }
/// }
/// ```
pub trait SimObserver {
    fn on_phase(&mut self, _phase: SimPhase) {}

    /// A car was queued at `station`; `depth` is that queue's depth right
    /// after the push.
    fn on_car_admitted(
        &mut self,
        _car:     CarId,
        _fuel:    FuelType,
        _station: StationId,
        _depth:   usize,
    ) {}

    /// A station handed a car to `register`; `depth` as above.
    fn on_car_forwarded(&mut self, _car: CarId, _register: RegisterId, _depth: usize) {}

    /// A car cleared the register stage and has been accounted.
    fn on_car_completed(&mut self, _car: &Car) {}

    /// Called once on the coordinator thread after statistics are finalized.
    fn on_sim_end(&mut self, _report: &StatsReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Events carried from worker threads to the observer thread.
pub(crate) enum SimEvent {
    Phase(SimPhase),
    Admitted {
        car:     CarId,
        fuel:    FuelType,
        station: StationId,
        depth:   usize,
    },
    Forwarded {
        car:      CarId,
        register: RegisterId,
        depth:    usize,
    },
    Completed(Car),
}

impl SimEvent {
    pub(crate) fn deliver<O: SimObserver + ?Sized>(self, observer: &mut O) {
        match self {
            SimEvent::Phase(phase) => observer.on_phase(phase),
            SimEvent::Admitted { car, fuel, station, depth } => {
                observer.on_car_admitted(car, fuel, station, depth)
            }
            SimEvent::Forwarded { car, register, depth } => {
                observer.on_car_forwarded(car, register, depth)
            }
            SimEvent::Completed(car) => observer.on_car_completed(&car),
        }
    }
}
