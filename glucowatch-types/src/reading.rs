//! Reading - a single timestamped blood sugar value.

use chrono::{DateTime, Local, Timelike};

/// Format used for every time label (chart axis, history panels, export).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single timestamped measurement.
///
/// Readings are immutable once created. The timestamp has second resolution,
/// matching the `HH:MM:SS` labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Wall-clock time at which the value was taken.
    pub timestamp: DateTime<Local>,
    /// Measured value in mg/dL.
    pub value: f64,
}

impl Reading {
    /// Create a reading, truncating the timestamp to whole seconds.
    pub fn new(timestamp: DateTime<Local>, value: f64) -> Self {
        Self {
            timestamp: truncate_to_seconds(timestamp),
            value,
        }
    }

    /// Create a reading stamped with the current local time.
    pub fn now(value: f64) -> Self {
        Self::new(Local::now(), value)
    }

    /// The timestamp formatted as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }
}

fn truncate_to_seconds(timestamp: DateTime<Local>) -> DateTime<Local> {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
