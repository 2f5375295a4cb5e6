//! Monitor configuration.

use glucowatch_types::Thresholds;
use serde::Deserialize;

use crate::error::{MonitorError, Result};
use crate::ledger::DEFAULT_LEDGER_CAPACITY;
use crate::window::DEFAULT_WINDOW_CAPACITY;

/// Sizing and classification settings for a [`MonitorCore`].
///
/// Defaults: a 20-reading window, 5 readings per band and 70/140/180
/// thresholds.
///
/// [`MonitorCore`]: crate::MonitorCore
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Readings kept for the live chart.
    pub window_capacity: usize,
    /// Readings kept per loggable band.
    pub ledger_capacity: usize,
    /// Band cut points.
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            ledger_capacity: DEFAULT_LEDGER_CAPACITY,
            thresholds: Thresholds::default(),
        }
    }
}

impl MonitorConfig {
    /// Check capacities and thresholds.
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "window_capacity must be at least 1".to_string(),
            ));
        }
        if self.ledger_capacity == 0 {
            return Err(MonitorError::InvalidConfig(
                "ledger_capacity must be at least 1".to_string(),
            ));
        }
        if !self.thresholds.is_well_formed() {
            let t = &self.thresholds;
            return Err(MonitorError::InvalidConfig(format!(
                "thresholds must be finite and strictly increasing (got low={}, elevated={}, critical={})",
                t.low, t.elevated, t.critical
            )));
        }
        Ok(())
    }
}
