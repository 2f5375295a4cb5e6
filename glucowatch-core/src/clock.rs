//! Time sources used to stamp readings.

use std::fmt::Debug;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local};

/// Provides the wall-clock instant at which a reading is taken.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Local>;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A deterministic clock that advances by a fixed step on every call.
///
/// The first call returns `start`, the next `start + step`, and so on.
#[derive(Debug)]
pub struct ManualClock {
    start: DateTime<Local>,
    step_secs: i64,
    calls: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>, step_secs: i64) -> Self {
        Self {
            start,
            step_secs,
            calls: AtomicI64::new(0),
        }
    }

    /// Number of instants handed out so far.
    pub fn calls(&self) -> i64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        self.start + chrono::Duration::seconds(n * self.step_secs)
    }
}
