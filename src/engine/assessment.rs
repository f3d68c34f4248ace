//! Stop-loss quality: compares the actual stop distance to the recommended band.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Results, StopRecommendation};

/// Where the stop distance falls relative to the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopQuality {
    Good,
    Tight,
    Wide,
    /// No recommendation exists for this risk level and pair
    Unknown,
}

impl StopQuality {
    pub fn message(&self) -> &'static str {
        match self {
            StopQuality::Good => "Within recommended range",
            StopQuality::Tight => "Stop too tight - may get stopped by market noise",
            StopQuality::Wide => "Stop very wide - consider reducing position size",
            StopQuality::Unknown => "No recommendation available",
        }
    }
}

impl fmt::Display for StopQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.message())
    }
}

/// Classify a stop distance against an optional band. Both band edges count as good.
pub fn classify_stop(stop_pips: Decimal, recommendation: Option<&StopRecommendation>) -> StopQuality {
    let Some(rec) = recommendation else {
        return StopQuality::Unknown;
    };

    if stop_pips < Decimal::from(rec.min) {
        StopQuality::Tight
    } else if stop_pips > Decimal::from(rec.max) {
        StopQuality::Wide
    } else {
        StopQuality::Good
    }
}

/// Assess the stop of a completed calculation.
pub fn assess_stop(results: &Results) -> StopQuality {
    classify_stop(results.stop_distance_pips, results.stop_recommendation.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn band() -> StopRecommendation {
        StopRecommendation::new(40, 60, "Wider stops help avoid market noise while learning")
    }

    #[test]
    fn test_band_edges_are_good() {
        let rec = band();
        assert_eq!(classify_stop(dec!(40), Some(&rec)), StopQuality::Good);
        assert_eq!(classify_stop(dec!(50), Some(&rec)), StopQuality::Good);
        assert_eq!(classify_stop(dec!(60), Some(&rec)), StopQuality::Good);
    }

    #[test]
    fn test_tight_and_wide() {
        let rec = band();
        assert_eq!(classify_stop(dec!(39.9), Some(&rec)), StopQuality::Tight);
        assert_eq!(classify_stop(Decimal::ZERO, Some(&rec)), StopQuality::Tight);
        assert_eq!(classify_stop(dec!(60.1), Some(&rec)), StopQuality::Wide);
    }

    #[test]
    fn test_missing_recommendation() {
        let quality = classify_stop(dec!(50), None);
        assert_eq!(quality, StopQuality::Unknown);
        assert_eq!(quality.message(), "No recommendation available");
    }
}
