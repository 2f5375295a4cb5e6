//! Tick orchestration.

use std::sync::Arc;

use glucowatch_types::{LedgerSnapshot, Reading, SeverityBand, Update};

use crate::classifier::Classifier;
use crate::clock::{Clock, SystemClock};
use crate::config::MonitorConfig;
use crate::error::Result;
use crate::ledger::CategoryLedger;
use crate::source::ReadingSource;
use crate::window::SlidingWindow;

/// Owns the sliding window and the per-band ledger.
///
/// `tick` is the only state-changing operation. It either completes every
/// step or, when the source fails, leaves both structures untouched.
///
/// # Example
///
/// ```
/// use glucowatch_core::{MonitorConfig, MonitorCore, SimulatedSource};
///
/// let mut core = MonitorCore::new(MonitorConfig::default()).unwrap();
/// let mut source = SimulatedSource::seeded(1);
///
/// let update = core.tick(&mut source).unwrap();
/// assert_eq!(update.window.len(), 1);
/// ```
#[derive(Debug)]
pub struct MonitorCore {
    config: MonitorConfig,
    classifier: Classifier,
    window: SlidingWindow,
    ledger: CategoryLedger,
    clock: Arc<dyn Clock>,
}

impl MonitorCore {
    /// Create a monitor stamped by the system clock.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a monitor with a custom clock.
    pub fn with_clock(config: MonitorConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            classifier: Classifier::new(config.thresholds),
            window: SlidingWindow::new(config.window_capacity),
            ledger: CategoryLedger::new(config.ledger_capacity),
            clock,
        })
    }

    /// Take one reading from `source` and fold it into the monitor state.
    pub fn tick<S: ReadingSource + ?Sized>(&mut self, source: &mut S) -> Result<Update> {
        let value = source.next_value()?;
        Ok(self.record_value(value))
    }

    /// Stamp an already-obtained value and fold it into the monitor state.
    pub fn record_value(&mut self, value: f64) -> Update {
        let reading = Reading::new(self.clock.now(), value);
        let classification = self.classifier.classify(value);

        self.window.push(reading);
        self.ledger.record(classification.band, reading);

        Update {
            reading,
            classification,
            window: self.window.snapshot(),
            ledger: self.ledger.snapshot_all(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn ledger(&self) -> &CategoryLedger {
        &self.ledger
    }

    /// Window contents, oldest first.
    pub fn window_snapshot(&self) -> Vec<Reading> {
        self.window.snapshot()
    }

    /// History for one band, oldest first.
    pub fn ledger_snapshot(&self, band: SeverityBand) -> Vec<Reading> {
        self.ledger.snapshot(band)
    }

    /// History for every loggable band.
    pub fn ledger_snapshot_all(&self) -> LedgerSnapshot {
        self.ledger.snapshot_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::MonitorError;
    use chrono::{Local, TimeZone};
    use std::collections::VecDeque;

    /// Replays a fixed list of results.
    #[derive(Debug)]
    struct ScriptedSource {
        values: VecDeque<std::result::Result<f64, String>>,
    }

    impl ScriptedSource {
        fn values(values: &[f64]) -> Self {
            Self {
                values: values.iter().map(|v| Ok(*v)).collect(),
            }
        }

        fn failing() -> Self {
            Self {
                values: VecDeque::from(vec![Err("sensor timeout".to_string())]),
            }
        }
    }

    impl ReadingSource for ScriptedSource {
        fn next_value(&mut self) -> Result<f64> {
            match self.values.pop_front() {
                Some(Ok(v)) => Ok(v),
                Some(Err(reason)) => Err(MonitorError::SourceUnavailable(reason)),
                None => Err(MonitorError::unavailable("script exhausted")),
            }
        }

        fn description(&self) -> &str {
            "scripted"
        }
    }

    fn core() -> MonitorCore {
        let start = Local.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        MonitorCore::with_clock(MonitorConfig::default(), Arc::new(ManualClock::new(start, 5)))
            .unwrap()
    }

    fn values(readings: &[Reading]) -> Vec<f64> {
        readings.iter().map(|r| r.value).collect()
    }

    #[test]
    fn mixed_readings_land_in_window_and_matching_ledgers() {
        let mut core = core();
        let mut source = ScriptedSource::values(&[65.0, 75.0, 150.0, 190.0]);

        let mut last = None;
        for _ in 0..4 {
            last = Some(core.tick(&mut source).unwrap());
        }
        let update = last.unwrap();

        assert_eq!(values(&update.window), vec![65.0, 75.0, 150.0, 190.0]);
        assert_eq!(values(update.history(SeverityBand::Low)), vec![65.0]);
        assert_eq!(values(update.history(SeverityBand::Elevated)), vec![150.0]);
        assert_eq!(values(update.history(SeverityBand::Critical)), vec![190.0]);
        assert!(update
            .ledger
            .values()
            .flatten()
            .all(|r| r.value != 75.0));
        assert_eq!(update.band(), SeverityBand::Critical);
        assert!(update.advice().is_some());
    }

    #[test]
    fn failed_read_leaves_state_unchanged() {
        let mut core = core();
        let mut good = ScriptedSource::values(&[55.0, 120.0, 170.0]);
        for _ in 0..3 {
            core.tick(&mut good).unwrap();
        }
        let window_before = core.window().clone();
        let ledger_before = core.ledger().clone();

        let err = core.tick(&mut ScriptedSource::failing()).unwrap_err();
        assert!(matches!(err, MonitorError::SourceUnavailable(ref r) if r == "sensor timeout"));

        assert_eq!(core.window(), &window_before);
        assert_eq!(core.ledger(), &ledger_before);
    }

    #[test]
    fn timestamps_reflect_when_reading_was_taken() {
        let mut core = core();
        let mut source = ScriptedSource::values(&[100.0, 101.0]);

        let first = core.tick(&mut source).unwrap();
        let second = core.tick(&mut source).unwrap();

        assert_eq!(first.reading.time_label(), "08:00:00");
        assert_eq!(second.reading.time_label(), "08:00:05");
        assert_eq!(second.window[0], first.reading);
    }

    #[test]
    fn failed_read_does_not_consume_a_timestamp() {
        let start = Local.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start, 5));
        let mut core = MonitorCore::with_clock(MonitorConfig::default(), clock.clone()).unwrap();

        let _ = core.tick(&mut ScriptedSource::failing());
        assert_eq!(clock.calls(), 0);
    }

    #[test]
    fn update_snapshots_match_core_state() {
        let mut core = core();
        let mut source = ScriptedSource::values(&[45.0, 95.0]);
        core.tick(&mut source).unwrap();
        let update = core.tick(&mut source).unwrap();

        assert_eq!(update.window, core.window_snapshot());
        assert_eq!(update.ledger, core.ledger_snapshot_all());
        assert_eq!(update.band(), SeverityBand::Normal);
        assert!(update.advice().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = MonitorConfig {
            window_capacity: 0,
            ..MonitorConfig::default()
        };
        assert!(matches!(
            MonitorCore::new(config),
            Err(MonitorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn huge_capacities_do_not_preallocate() {
        let config = MonitorConfig {
            window_capacity: usize::MAX,
            ledger_capacity: usize::MAX,
            ..MonitorConfig::default()
        };
        let mut core = MonitorCore::new(config).unwrap();

        let update = core.record_value(190.0);
        assert_eq!(update.window.len(), 1);
        assert_eq!(core.ledger().len(SeverityBand::Critical), 1);
    }

    #[test]
    fn memory_stays_bounded_over_long_runs() {
        let mut core = core();
        let mut source = crate::SimulatedSource::seeded(11);
        for _ in 0..10_000 {
            core.tick(&mut source).unwrap();
        }
        assert_eq!(core.window().len(), 20);
        for band in SeverityBand::LOGGABLE {
            assert!(core.ledger().len(band) <= 5);
        }
    }
}
