//! Update - the per-tick output handed to the presentation layer.

use std::collections::BTreeMap;

use crate::{ClassificationResult, Reading, SeverityBand};

/// Recent readings per loggable band, oldest first.
pub type LedgerSnapshot = BTreeMap<SeverityBand, Vec<Reading>>;

/// Everything a renderer needs after one tick.
///
/// Built fresh on every tick and never retained by the monitor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Update {
    /// The reading taken this tick.
    pub reading: Reading,
    /// Its classification.
    pub classification: ClassificationResult,
    /// Sliding window contents, oldest first.
    pub window: Vec<Reading>,
    /// Per-band history, oldest first within each band.
    pub ledger: LedgerSnapshot,
}

impl Update {
    /// Band of the reading taken this tick.
    pub fn band(&self) -> SeverityBand {
        self.classification.band
    }

    /// Advice to surface for this tick, if any.
    pub fn advice(&self) -> Option<&'static str> {
        self.classification.advice
    }

    /// History for one band. Empty for Normal.
    pub fn history(&self, band: SeverityBand) -> &[Reading] {
        self.ledger.get(&band).map(Vec::as_slice).unwrap_or(&[])
    }
}
