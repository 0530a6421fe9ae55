//! Bounded, closable FIFO work queue shared by stations and registers.

use crossbeam::channel::{self, Receiver, Sender};
use gs_core::Car;
use parking_lot::RwLock;

/// A bounded multi-producer, single-consumer queue of cars.
///
/// Producers are dispatch calls from any thread; the consumer is the owning
/// server's service loop.  [`push`][Self::push] blocks while the queue is
/// full.  After [`close`][Self::close] no new car is admitted, but cars
/// already queued are still delivered to the consumer.
pub struct WorkQueue {
    sender:   RwLock<Option<Sender<Car>>>,
    receiver: Receiver<Car>,
    capacity: usize,
}

impl WorkQueue {
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = channel::bounded(capacity);
        Self {
            sender:   RwLock::new(Some(tx)),
            receiver: rx,
            capacity,
        }
    }

    /// Enqueue `car`, blocking while the queue is full.
    ///
    /// Gives the car back if the queue has been closed.
    pub fn push(&self, car: Car) -> Result<(), Car> {
        // Clone the sender so the lock is not held across a blocking send.
        let sender = match self.sender.read().as_ref() {
            Some(tx) => tx.clone(),
            None     => return Err(car),
        };
        sender.send(car).map_err(|e| e.into_inner())
    }

    /// Stop admitting cars.  Idempotent.
    pub fn close(&self) {
        self.sender.write().take();
    }

    pub fn is_closed(&self) -> bool {
        self.sender.read().is_none()
    }

    /// Cars currently waiting (not counting one being served).
    #[inline]
    pub fn depth(&self) -> usize {
        self.receiver.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumer handle for the service loop.  Iterating it ends once the
    /// queue is closed and drained.
    pub(crate) fn consumer(&self) -> Receiver<Car> {
        self.receiver.clone()
    }
}
