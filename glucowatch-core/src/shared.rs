//! Thread-safe handle around a [`MonitorCore`].

use std::sync::Arc;

use glucowatch_types::{LedgerSnapshot, Reading, SeverityBand, Update};
use parking_lot::Mutex;

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::monitor::MonitorCore;
use crate::source::ReadingSource;

/// Cloneable handle that serializes access to a monitor.
///
/// A background ticker and a renderer can each hold a clone. Every mutation
/// runs as a single critical section, so snapshot readers never observe a
/// half-applied tick. The reading source is always called outside the lock.
///
/// # Example
///
/// ```
/// use glucowatch_core::{MonitorConfig, MonitorCore, SharedMonitor, SimulatedSource};
///
/// let monitor = SharedMonitor::new(MonitorCore::new(MonitorConfig::default()).unwrap());
/// let renderer = monitor.clone();
///
/// let mut source = SimulatedSource::seeded(3);
/// monitor.tick(&mut source).unwrap();
///
/// assert_eq!(renderer.window().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SharedMonitor {
    inner: Arc<Mutex<MonitorCore>>,
}

impl SharedMonitor {
    pub fn new(core: MonitorCore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(core)),
        }
    }

    /// Pull a value from `source`, then apply it under the lock.
    ///
    /// A source failure returns before the lock is taken.
    pub fn tick<S: ReadingSource + ?Sized>(&self, source: &mut S) -> Result<Update> {
        let value = source.next_value()?;
        Ok(self.record_value(value))
    }

    /// Apply an already-obtained value under the lock.
    pub fn record_value(&self, value: f64) -> Update {
        self.inner.lock().record_value(value)
    }

    /// Window contents, oldest first.
    pub fn window(&self) -> Vec<Reading> {
        self.inner.lock().window_snapshot()
    }

    /// History for one band, oldest first.
    pub fn ledger(&self, band: SeverityBand) -> Vec<Reading> {
        self.inner.lock().ledger_snapshot(band)
    }

    /// History for every loggable band.
    pub fn ledger_all(&self) -> LedgerSnapshot {
        self.inner.lock().ledger_snapshot_all()
    }

    /// Most recent reading, if any.
    pub fn latest(&self) -> Option<Reading> {
        self.inner.lock().window().latest().copied()
    }

    pub fn config(&self) -> MonitorConfig {
        *self.inner.lock().config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::MonitorError;
    use crate::SimulatedSource;
    use chrono::{Local, TimeZone};
    use std::thread;

    #[derive(Debug)]
    struct Offline;

    impl ReadingSource for Offline {
        fn next_value(&mut self) -> Result<f64> {
            Err(MonitorError::unavailable("offline"))
        }

        fn description(&self) -> &str {
            "offline"
        }
    }

    fn shared() -> SharedMonitor {
        let start = Local.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let core =
            MonitorCore::with_clock(MonitorConfig::default(), Arc::new(ManualClock::new(start, 1)))
                .unwrap();
        SharedMonitor::new(core)
    }

    #[test]
    fn clones_share_state() {
        let monitor = shared();
        let reader = monitor.clone();

        monitor.record_value(65.0);
        monitor.record_value(150.0);

        assert_eq!(reader.window().len(), 2);
        assert_eq!(reader.ledger(SeverityBand::Low).len(), 1);
        assert_eq!(reader.ledger(SeverityBand::Elevated).len(), 1);
        assert_eq!(reader.latest().map(|r| r.value), Some(150.0));
    }

    #[test]
    fn failed_tick_is_atomic() {
        let monitor = shared();
        monitor.record_value(190.0);
        let window = monitor.window();
        let ledger = monitor.ledger_all();

        assert!(monitor.tick(&mut Offline).is_err());
        assert_eq!(monitor.window(), window);
        assert_eq!(monitor.ledger_all(), ledger);
    }

    #[test]
    fn concurrent_readers_see_whole_ticks() {
        let monitor = shared();
        let writer = monitor.clone();

        let handle = thread::spawn(move || {
            let mut source = SimulatedSource::seeded(5);
            for _ in 0..2_000 {
                writer.tick(&mut source).unwrap();
            }
        });

        for _ in 0..2_000 {
            let window = monitor.window();
            assert!(window.len() <= 20);
            assert!(window.windows(2).all(|p| p[0].timestamp < p[1].timestamp));
        }
        handle.join().unwrap();

        assert_eq!(monitor.window().len(), 20);
        assert_eq!(monitor.config().window_capacity, 20);
    }
}
