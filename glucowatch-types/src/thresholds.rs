//! Band cut points.

use crate::SeverityBand;

/// Cut points separating the severity bands, in mg/dL.
///
/// Bands are half-open intervals: `[low, elevated)` is Normal,
/// `[elevated, critical)` is Elevated, everything below `low` is Low and
/// everything from `critical` upwards is Critical.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    /// Values below this are Low.
    pub low: f64,
    /// Values at or above this (and below `critical`) are Elevated.
    pub elevated: f64,
    /// Values at or above this are Critical.
    pub critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            low: 70.0,
            elevated: 140.0,
            critical: 180.0,
        }
    }
}

impl Thresholds {
    /// Map a value to its band. First match wins, in ascending order.
    ///
    /// NaN fails every comparison and lands in Critical.
    pub fn band_for(&self, value: f64) -> SeverityBand {
        if value < self.low {
            SeverityBand::Low
        } else if value < self.elevated {
            SeverityBand::Normal
        } else if value < self.critical {
            SeverityBand::Elevated
        } else {
            SeverityBand::Critical
        }
    }

    /// True when all cut points are finite and strictly increasing.
    pub fn is_well_formed(&self) -> bool {
        [self.low, self.elevated, self.critical].iter().all(|v| v.is_finite())
            && self.low < self.elevated
            && self.elevated < self.critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_half_open() {
        let t = Thresholds::default();
        assert_eq!(t.band_for(69.99), SeverityBand::Low);
        assert_eq!(t.band_for(70.0), SeverityBand::Normal);
        assert_eq!(t.band_for(139.999), SeverityBand::Normal);
        assert_eq!(t.band_for(140.0), SeverityBand::Elevated);
        assert_eq!(t.band_for(179.99), SeverityBand::Elevated);
        assert_eq!(t.band_for(180.0), SeverityBand::Critical);
    }

    #[test]
    fn extreme_values_are_classified() {
        let t = Thresholds::default();
        assert_eq!(t.band_for(-40.0), SeverityBand::Low);
        assert_eq!(t.band_for(f64::NEG_INFINITY), SeverityBand::Low);
        assert_eq!(t.band_for(1e9), SeverityBand::Critical);
        assert_eq!(t.band_for(f64::NAN), SeverityBand::Critical);
    }

    #[test]
    fn well_formed_rejects_unordered_cut_points() {
        assert!(Thresholds::default().is_well_formed());

        let swapped = Thresholds {
            low: 150.0,
            elevated: 140.0,
            critical: 180.0,
        };
        assert!(!swapped.is_well_formed());

        let equal = Thresholds {
            low: 70.0,
            elevated: 70.0,
            critical: 180.0,
        };
        assert!(!equal.is_well_formed());

        let infinite = Thresholds {
            critical: f64::INFINITY,
            ..Thresholds::default()
        };
        assert!(!infinite.is_well_formed());
    }
}
