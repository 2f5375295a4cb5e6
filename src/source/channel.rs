//! Channel-based reading source.
//!
//! Receives values via a tokio mpsc channel. Useful for bridging from any
//! producer (another task, a test harness, a replay thread) where values are
//! pushed rather than generated on demand.

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use glucowatch_core::{MonitorError, ReadingSource};

/// Capacity of the channel created by [`ChannelSource::create`].
const CHANNEL_CAPACITY: usize = 64;

/// A source that takes the oldest pushed value on each tick.
///
/// # Example
///
/// ```
/// use glucowatch::{ChannelSource, ReadingSource};
///
/// let (tx, mut source) = ChannelSource::create("bench");
/// tx.try_send(128.5).unwrap();
/// assert_eq!(source.next_value().unwrap(), 128.5);
/// assert!(source.next_value().is_err());
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::Receiver<f64>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of an mpsc channel
    /// * `source_description` - Where values come from (e.g., "replay-thread")
    pub fn new(receiver: mpsc::Receiver<f64>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
        }
    }

    /// Create a channel pair for pushing values into a ChannelSource.
    pub fn create(source_description: &str) -> (mpsc::Sender<f64>, Self) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (tx, Self::new(rx, source_description))
    }
}

impl ReadingSource for ChannelSource {
    fn next_value(&mut self) -> glucowatch_core::Result<f64> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(value),
            Err(TryRecvError::Empty) => Err(MonitorError::unavailable("no reading pending")),
            Err(TryRecvError::Disconnected) => Err(MonitorError::unavailable("channel closed")),
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
