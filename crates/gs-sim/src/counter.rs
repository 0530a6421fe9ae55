//! Outstanding-work counter used to detect simulation completion.

use parking_lot::{Condvar, Mutex};

/// Count of admitted cars that have not yet cleared the register stage.
///
/// Incremented once per admitted car, decremented exactly once per car that
/// leaves the pipeline; [`wait_zero`][Self::wait_zero] blocks until the two
/// balance.
#[derive(Default)]
pub struct WorkCounter {
    outstanding: Mutex<usize>,
    zero:        Condvar,
}

impl WorkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self) {
        *self.outstanding.lock() += 1;
    }

    /// Release one unit of work, waking waiters when the count hits zero.
    pub fn done(&self) {
        let mut outstanding = self.outstanding.lock();
        debug_assert!(*outstanding > 0, "WorkCounter::done without matching add");
        *outstanding = outstanding.saturating_sub(1);
        if *outstanding == 0 {
            self.zero.notify_all();
        }
    }

    pub fn outstanding(&self) -> usize {
        *self.outstanding.lock()
    }

    /// Block until every added unit has been released.
    pub fn wait_zero(&self) {
        let mut outstanding = self.outstanding.lock();
        while *outstanding > 0 {
            self.zero.wait(&mut outstanding);
        }
    }
}
