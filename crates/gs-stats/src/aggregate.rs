//! Running count / total / maximum for one statistics key.

use std::time::Duration;

use crate::Summary;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub count: u64,
    pub total: Duration,
    pub max:   Duration,
}

impl Aggregate {
    #[inline]
    pub fn add(&mut self, time: Duration) {
        self.count += 1;
        self.total += time;
        self.max = self.max.max(time);
    }

    /// `total / count`, or `None` when nothing has been recorded.
    ///
    /// Computed on whole nanoseconds, so the result is exact whenever the
    /// total divides evenly.
    pub fn mean(&self) -> Option<Duration> {
        if self.count == 0 {
            return None;
        }
        let nanos = self.total.as_nanos() / u128::from(self.count);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_cars:   self.count,
            total_time:   self.total,
            average_time: self.mean(),
            max_time:     self.max,
        }
    }
}
