//! Threshold classification of readings.

use glucowatch_types::{ClassificationResult, Thresholds};

/// Maps values to severity bands using a fixed set of thresholds.
///
/// Pure and total: every `f64` is classified and nothing is mutated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    thresholds: Thresholds,
}

impl Classifier {
    /// Create a classifier with custom cut points.
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a value, attaching the band's advice.
    pub fn classify(&self, value: f64) -> ClassificationResult {
        ClassificationResult::for_band(self.thresholds.band_for(value))
    }
}

/// Classify a value against the default 70/140/180 thresholds.
pub fn classify(value: f64) -> ClassificationResult {
    Classifier::default().classify(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glucowatch_types::SeverityBand;

    #[test]
    fn boundary_values_follow_half_open_rule() {
        let normal = classify(70.0);
        assert_eq!(normal.band, SeverityBand::Normal);
        assert!(normal.advice.is_none());

        assert_eq!(classify(139.99).band, SeverityBand::Normal);
        assert_eq!(classify(139.999).band, SeverityBand::Normal);

        let elevated = classify(140.0);
        assert_eq!(elevated.band, SeverityBand::Elevated);
        assert_eq!(
            elevated.advice,
            Some("Drink water, go for a walk, and reduce sugar intake.")
        );

        assert_eq!(classify(180.0).band, SeverityBand::Critical);
    }

    #[test]
    fn advice_matches_band() {
        assert_eq!(
            classify(55.0).advice,
            Some("Eat a fast-acting sugar (juice, candy, glucose tablets).")
        );
        assert_eq!(
            classify(250.0).advice,
            Some("Consult a doctor, take insulin if prescribed.")
        );
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        // Sweep the real line in small steps; each value maps to exactly one
        // band and bands never go backwards as the value increases.
        let mut previous = SeverityBand::Low;
        let mut v = -50.0;
        while v < 300.0 {
            let band = classify(v).band;
            assert!(band >= previous, "band regressed at {v}");
            previous = band;
            v += 0.25;
        }
        assert_eq!(previous, SeverityBand::Critical);
    }

    #[test]
    fn custom_thresholds_shift_boundaries() {
        let classifier = Classifier::new(Thresholds {
            low: 80.0,
            elevated: 130.0,
            critical: 200.0,
        });
        assert_eq!(classifier.classify(75.0).band, SeverityBand::Low);
        assert_eq!(classifier.classify(130.0).band, SeverityBand::Elevated);
        assert_eq!(classifier.classify(190.0).band, SeverityBand::Elevated);
        assert_eq!(classifier.classify(200.0).band, SeverityBand::Critical);
    }
}
