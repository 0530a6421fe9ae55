//! `gs-sim` — concurrent dispatch-and-service engine for the gas station
//! simulation.
//!
//! # Pipeline
//!
//! ```text
//! arrival thread ──dispatch──▶ Station queue ──▶ station thread
//!                                                    │ sleep(service)
//!                                                    ▼
//!                              Register queue ◀──dispatch
//!                                    │
//!                                    ▼
//!                              register thread ── sleep(handle)
//!                                    │
//!                                    ├─▶ StatsAggregator::record
//!                                    ├─▶ observer event
//!                                    └─▶ WorkCounter::done
//! ```
//!
//! Dispatch picks the eligible server with the shortest queue, breaking ties
//! uniformly at random.  Queues are bounded; a full queue blocks the
//! dispatching thread.  The coordinator waits for the outstanding-work
//! counter to reach zero before closing any queue.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{} cars paid", report.registers.total_cars);
//! ```

pub mod builder;
pub mod counter;
pub mod dispatch;
pub mod error;
pub mod observer;
pub mod pool;
pub mod queue;
pub mod server;
pub mod sim;


pub use builder::SimBuilder;
pub use counter::WorkCounter;
pub use dispatch::{QueueDepth, select_least_loaded};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimPhase};
pub use pool::{RegisterPool, StationPool};
pub use queue::WorkQueue;
pub use server::{Register, Station};
pub use sim::Sim;
