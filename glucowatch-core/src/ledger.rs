//! Per-band recent-event history.

use std::collections::{BTreeMap, VecDeque};

use glucowatch_types::{LedgerSnapshot, Reading, SeverityBand};

/// Default number of readings kept per band.
pub const DEFAULT_LEDGER_CAPACITY: usize = 5;

/// Independent bounded FIFOs, one per loggable band.
///
/// Each queue evicts on its own: a burst of Critical readings never touches
/// the Low queue. Normal readings are never recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLedger {
    queues: BTreeMap<SeverityBand, VecDeque<Reading>>,
    capacity: usize,
}

impl Default for CategoryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_CAPACITY)
    }
}

impl CategoryLedger {
    /// Create an empty ledger with `capacity` slots per band.
    pub fn new(capacity: usize) -> Self {
        let queues = SeverityBand::LOGGABLE
            .iter()
            .map(|band| (*band, VecDeque::new()))
            .collect();
        Self { queues, capacity }
    }

    /// Record a reading under `band`. No-op for bands that are not logged.
    pub fn record(&mut self, band: SeverityBand, reading: Reading) {
        let Some(queue) = self.queues.get_mut(&band) else {
            return;
        };
        queue.push_back(reading);
        if queue.len() > self.capacity {
            queue.pop_front();
        }
    }

    /// History for one band, oldest first. Empty for Normal.
    pub fn snapshot(&self, band: SeverityBand) -> Vec<Reading> {
        self.queues
            .get(&band)
            .map(|q| q.iter().copied().collect())
            .unwrap_or_default()
    }

    /// History for every loggable band.
    pub fn snapshot_all(&self) -> LedgerSnapshot {
        self.queues
            .iter()
            .map(|(band, q)| (*band, q.iter().copied().collect()))
            .collect()
    }

    /// Number of readings held for `band`.
    pub fn len(&self, band: SeverityBand) -> usize {
        self.queues.get(&band).map_or(0, VecDeque::len)
    }

    /// True when no band holds any reading.
    pub fn is_empty(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn reading(second: u32, value: f64) -> Reading {
        let at = Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
            + chrono::Duration::seconds(second as i64);
        Reading::new(at, value)
    }

    #[test]
    fn new_ledger_has_empty_loggable_bands() {
        let ledger = CategoryLedger::new(5);
        assert!(ledger.is_empty());

        let all = ledger.snapshot_all();
        assert_eq!(all.len(), 3);
        assert!(!all.contains_key(&SeverityBand::Normal));
        assert!(all.values().all(Vec::is_empty));
    }

    #[test]
    fn normal_is_never_recorded() {
        let mut ledger = CategoryLedger::new(5);
        ledger.record(SeverityBand::Normal, reading(0, 100.0));

        assert!(ledger.is_empty());
        assert!(ledger.snapshot(SeverityBand::Normal).is_empty());
    }

    #[test]
    fn sixth_low_reading_evicts_the_first() {
        let mut ledger = CategoryLedger::new(5);
        for i in 1..=6 {
            ledger.record(SeverityBand::Low, reading(i, 60.0 + i as f64));
        }

        let low = ledger.snapshot(SeverityBand::Low);
        let expected: Vec<Reading> = (2..=6).map(|i| reading(i, 60.0 + i as f64)).collect();
        assert_eq!(low, expected);
    }

    #[test]
    fn bands_evict_independently() {
        let mut ledger = CategoryLedger::new(3);
        ledger.record(SeverityBand::Low, reading(0, 50.0));
        ledger.record(SeverityBand::Low, reading(1, 55.0));
        let low_before = ledger.snapshot(SeverityBand::Low);

        for i in 2..20 {
            ledger.record(SeverityBand::Critical, reading(i, 200.0 + i as f64));
        }

        assert_eq!(ledger.snapshot(SeverityBand::Low), low_before);
        assert_eq!(ledger.len(SeverityBand::Critical), 3);
        assert_eq!(ledger.len(SeverityBand::Elevated), 0);

        let critical = ledger.snapshot(SeverityBand::Critical);
        assert_eq!(critical[0].value, 217.0);
        assert_eq!(critical[2].value, 219.0);
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut ledger = CategoryLedger::new(usize::MAX);
        ledger.record(SeverityBand::Low, reading(0, 60.0));

        assert_eq!(ledger.capacity(), usize::MAX);
        assert_eq!(ledger.len(SeverityBand::Low), 1);
    }

    #[test]
    fn snapshot_does_not_mutate() {
        let mut ledger = CategoryLedger::new(2);
        ledger.record(SeverityBand::Elevated, reading(0, 150.0));
        ledger.record(SeverityBand::Elevated, reading(1, 160.0));

        let first = ledger.snapshot_all();
        let second = ledger.snapshot_all();
        assert_eq!(first, second);
        assert_eq!(ledger.snapshot(SeverityBand::Elevated), ledger.snapshot(SeverityBand::Elevated));
    }
}
