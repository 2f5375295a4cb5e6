//! Severity bands and classification results.

use core::fmt;

/// Severity band a reading falls into.
///
/// Variants are declared in order of clinical severity, so the derived
/// ordering can be used for tie-breaks and sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeverityBand {
    Low,
    Normal,
    Elevated,
    Critical,
}

impl SeverityBand {
    /// Every band, lowest first.
    pub const ALL: [SeverityBand; 4] = [
        SeverityBand::Low,
        SeverityBand::Normal,
        SeverityBand::Elevated,
        SeverityBand::Critical,
    ];

    /// Bands that get a recent-event log.
    pub const LOGGABLE: [SeverityBand; 3] = [
        SeverityBand::Low,
        SeverityBand::Elevated,
        SeverityBand::Critical,
    ];

    /// Whether readings in this band are kept in the per-band history.
    pub fn is_loggable(&self) -> bool {
        !matches!(self, SeverityBand::Normal)
    }

    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            SeverityBand::Low => "LOW",
            SeverityBand::Normal => "OK",
            SeverityBand::Elevated => "HIGH",
            SeverityBand::Critical => "CRIT",
        }
    }

    /// Returns the condition description shown next to the current value.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::Low => "Low Blood Sugar (Hypoglycemia)",
            SeverityBand::Normal => "Normal Blood Sugar",
            SeverityBand::Elevated => "High Blood Sugar (Pre-Diabetes)",
            SeverityBand::Critical => "Critical High Blood Sugar! (Diabetes Alert)",
        }
    }

    /// Title of the history panel for this band.
    pub fn history_title(&self) -> &'static str {
        match self {
            SeverityBand::Low => "Low",
            SeverityBand::Normal => "Normal",
            SeverityBand::Elevated => "High",
            SeverityBand::Critical => "Critical",
        }
    }

    /// Recommendation for readings in this band. `None` for Normal.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            SeverityBand::Low => Some("Eat a fast-acting sugar (juice, candy, glucose tablets)."),
            SeverityBand::Normal => None,
            SeverityBand::Elevated => Some("Drink water, go for a walk, and reduce sugar intake."),
            SeverityBand::Critical => Some("Consult a doctor, take insulin if prescribed."),
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying a single value.
///
/// `advice` is present exactly when the band is not Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassificationResult {
    pub band: SeverityBand,
    pub advice: Option<&'static str>,
}

impl ClassificationResult {
    /// Build the result for a band, attaching its advice.
    pub fn for_band(band: SeverityBand) -> Self {
        Self {
            band,
            advice: band.advice(),
        }
    }

    /// Whether this result should trigger an alert.
    pub fn is_alert(&self) -> bool {
        self.advice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ordered_by_severity() {
        let mut shuffled = vec![
            SeverityBand::Critical,
            SeverityBand::Low,
            SeverityBand::Elevated,
            SeverityBand::Normal,
        ];
        shuffled.sort();
        assert_eq!(shuffled, SeverityBand::ALL.to_vec());
    }

    #[test]
    fn advice_present_iff_not_normal() {
        for band in SeverityBand::ALL {
            let result = ClassificationResult::for_band(band);
            assert_eq!(result.advice.is_some(), band != SeverityBand::Normal);
            assert_eq!(result.is_alert(), band.is_loggable());
        }
    }

    #[test]
    fn loggable_excludes_normal() {
        assert!(!SeverityBand::LOGGABLE.contains(&SeverityBand::Normal));
        assert!(SeverityBand::LOGGABLE.iter().all(|b| b.is_loggable()));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(SeverityBand::Normal.to_string(), "Normal Blood Sugar");
    }
}
