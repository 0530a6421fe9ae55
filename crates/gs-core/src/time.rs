//! Duration bounds and the queue-wait accounting toggle.
//!
//! # Design
//!
//! Every configurable duration is an integer number of milliseconds.  There
//! is no simulated clock: a sampled duration is realised by sleeping the
//! serving thread for that long, so timestamps elsewhere are plain
//! `std::time::Instant`s.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GsError, GsResult};

// ── MillisRange ──────────────────────────────────────────────────────────────

/// Inclusive `[min_ms, max_ms]` bounds for a sampled duration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct MillisRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl MillisRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// A degenerate range that always samples `ms`.
    pub const fn fixed(ms: u64) -> Self {
        Self { min_ms: ms, max_ms: ms }
    }

    /// Reject inverted bounds.  `what` names the field in the error message.
    pub fn validate(&self, what: &str) -> GsResult<()> {
        if self.min_ms > self.max_ms {
            return Err(GsError::ConfigValidation(format!(
                "{what}: min {}ms is greater than max {}ms",
                self.min_ms, self.max_ms
            )));
        }
        Ok(())
    }

    /// Validate and wrap the bounds so they can be sampled.
    pub fn checked(self, what: &str) -> GsResult<CheckedRange> {
        self.validate(what)?;
        Ok(CheckedRange(self))
    }

    #[inline]
    pub fn contains(&self, ms: u64) -> bool {
        (self.min_ms..=self.max_ms).contains(&ms)
    }
}

impl fmt::Display for MillisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}ms, {}ms]", self.min_ms, self.max_ms)
    }
}

/// A [`MillisRange`] whose bounds are known to be ordered.
///
/// Only [`MillisRange::checked`] builds one, so
/// [`SimRng::sample_duration`][crate::SimRng::sample_duration] never sees
/// inverted bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CheckedRange(MillisRange);

impl CheckedRange {
    #[inline]
    pub fn bounds(self) -> MillisRange {
        self.0
    }
}

impl fmt::Display for CheckedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ── TimingMode ────────────────────────────────────────────────────────────────

/// Whether queue wait counts towards a stage's recorded time.
///
/// Fixed for the whole run.  `ServiceOnly` reports only the sampled service
/// durations; `IncludeQueueWait` adds the time each car spent queued before
/// the stage started serving it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    #[default]
    ServiceOnly,
    IncludeQueueWait,
}

impl TimingMode {
    #[inline]
    pub fn includes_queue_wait(self) -> bool {
        matches!(self, TimingMode::IncludeQueueWait)
    }
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingMode::ServiceOnly      => f.write_str("service only"),
            TimingMode::IncludeQueueWait => f.write_str("service + queue wait"),
        }
    }
}

// ── Duration strings ──────────────────────────────────────────────────────────

/// Parse a duration string into whole milliseconds.
///
/// Accepts a bare integer (milliseconds) or one or more `<number><unit>`
/// terms, e.g. `"250ms"`, `"1.5s"`, `"500us"`, `"1h"`, `"1m30s"`.  Units are
/// `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`; numbers may carry a
/// fractional part.  Resolution is one millisecond: any finer remainder is
/// truncated, so `"500us"` is 0.
///
/// A leading `-` is a validation error rather than a parse error: the value
/// is well-formed, it is just not a usable bound.
pub fn parse_millis(s: &str) -> GsResult<u64> {
    let s = s.trim();
    if s.starts_with('-') {
        return Err(GsError::ConfigValidation(format!("negative duration {s:?}")));
    }
    let body = s.strip_prefix('+').unwrap_or(s);
    if body.is_empty() {
        return Err(GsError::Parse("empty duration".into()));
    }
    if body.bytes().all(|b| b.is_ascii_digit()) {
        return body
            .parse()
            .map_err(|_| GsError::Parse(format!("duration {s:?} overflows")));
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut nanos: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let (number, tail) = rest.split_at(rest.find(|c| !is_number(c)).unwrap_or(rest.len()));
        let (unit, tail) = tail.split_at(tail.find(is_number).unwrap_or(tail.len()));
        let scale: u128 = match unit {
            "ns"               => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms"               => 1_000_000,
            "s"                => 1_000_000_000,
            "m"                => 60_000_000_000,
            "h"                => 3_600_000_000_000,
            ""                 => {
                return Err(GsError::Parse(format!("missing unit in duration {s:?}")));
            }
            other => {
                return Err(GsError::Parse(format!(
                    "invalid duration unit {other:?} in {s:?}: expected ns, us, ms, s, m, or h"
                )));
            }
        };
        let term = scale_term(number, scale)
            .ok_or_else(|| GsError::Parse(format!("invalid duration {s:?}")))?;
        nanos = nanos
            .checked_add(term)
            .ok_or_else(|| GsError::Parse(format!("duration {s:?} overflows")))?;
        rest = tail;
    }

    u64::try_from(nanos / 1_000_000)
        .map_err(|_| GsError::Parse(format!("duration {s:?} overflows")))
}

/// `number` (digits with an optional fractional part) times `scale`
/// nanoseconds, or `None` if `number` is malformed or too large.
fn scale_term(number: &str, scale: u128) -> Option<u128> {
    let (int, frac) = number.split_once('.').unwrap_or((number, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let whole: u128 = if int.is_empty() { 0 } else { int.parse().ok()? };

    // 18 digits exceed nanosecond precision for every unit and keep the
    // product below `u128::MAX`.
    let frac = &frac[..frac.len().min(18)];
    let fraction = if frac.is_empty() {
        0
    } else {
        let digits: u128 = frac.parse().ok()?;
        digits * scale / 10u128.pow(frac.len() as u32)
    };
    whole.checked_mul(scale)?.checked_add(fraction)
}
