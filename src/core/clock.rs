//! Start-Time Clock
//!
//! Source of match start timestamps. The registry ranks equal totals by start
//! time, so every issued stamp must be strictly later than the previous one,
//! even when the wall clock stalls or steps backwards.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Wall-clock source for start timestamps.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}

/// System UTC clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Used to pin start times in tests and benchmarks.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += by;
    }

    /// Jump to an arbitrary instant (may be in the past).
    pub fn set(&self, at: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Issues strictly increasing start stamps from a [`Clock`].
///
/// Not synchronized itself; the registry drives it from inside its write lock.
#[derive(Debug, Default)]
pub struct StartStamp {
    last: Option<DateTime<Utc>>,
}

impl StartStamp {
    /// Create a generator with no history.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Next stamp: the clock's reading, or one nanosecond past the previous
    /// stamp if the clock has not moved beyond it.
    pub fn issue(&mut self, clock: &dyn Clock) -> DateTime<Utc> {
        let now = clock.now();
        let stamp = match self.last {
            Some(last) if now <= last => last + Duration::nanoseconds(1),
            _ => now,
        };
        self.last = Some(stamp);
        stamp
    }
}
