//! Bounded sliding window of recent readings.

use std::collections::VecDeque;

use glucowatch_types::Reading;

/// Default number of readings kept for the live chart.
pub const DEFAULT_WINDOW_CAPACITY: usize = 20;

/// Fixed-capacity FIFO of readings in chronological order.
///
/// Memory stays O(capacity) no matter how many readings are pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl Default for SlidingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}

impl SlidingWindow {
    /// Create an empty window holding at most `capacity` readings.
    pub fn new(capacity: usize) -> Self {
        Self {
            readings: VecDeque::new(),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest one if the window is full.
    pub fn push(&mut self, reading: Reading) {
        self.readings.push_back(reading);
        if self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }

    /// Current contents, oldest first.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.iter().copied().collect()
    }

    /// Most recent reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
