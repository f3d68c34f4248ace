//! Recommended stop-loss bands by risk level and pair.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{CurrencyPair, RiskLevel, StopRecommendation};

const BEGINNER_MSG: &str = "Wider stops help avoid market noise while learning";
const BEGINNER_CROSS_MSG: &str = "Cross pairs need wider stops due to volatility";
const EXPERIENCED_MSG: &str = "Tighter stops with improved entry timing";
const EXPERIENCED_CROSS_MSG: &str = "Moderate stops for cross pair volatility";
const EXPERT_MSG: &str = "Precision entries allow tighter risk management";
const EXPERT_CROSS_MSG: &str = "Tight stops for experienced cross pair trading";

/// Static lookup of stop-loss bands, keyed by risk level then pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopLossTable {
    bands: BTreeMap<RiskLevel, BTreeMap<CurrencyPair, StopRecommendation>>,
}

impl StopLossTable {
    pub fn empty() -> Self {
        Self {
            bands: BTreeMap::new(),
        }
    }

    /// The built-in reference bands.
    pub fn standard() -> Self {
        use CurrencyPair::*;

        let mut table = Self::empty();
        for level in RiskLevel::ALL {
            // (usd majors, USD/JPY, JPY crosses)
            let ((lo, hi, msg), (jpy_lo, jpy_hi), (x_lo, x_hi, x_msg)) = match level {
                RiskLevel::Beginner => ((40, 60, BEGINNER_MSG), (35, 50), (60, 80, BEGINNER_CROSS_MSG)),
                RiskLevel::Experienced => {
                    ((25, 40, EXPERIENCED_MSG), (20, 35), (40, 60, EXPERIENCED_CROSS_MSG))
                }
                RiskLevel::Expert => ((15, 30, EXPERT_MSG), (10, 25), (25, 45, EXPERT_CROSS_MSG)),
            };

            for pair in [EurUsd, GbpUsd, AudUsd, NzdUsd, UsdCad] {
                table.insert(level, pair, StopRecommendation::new(lo, hi, msg));
            }
            table.insert(level, UsdJpy, StopRecommendation::new(jpy_lo, jpy_hi, msg));
            for pair in [EurJpy, GbpJpy] {
                table.insert(level, pair, StopRecommendation::new(x_lo, x_hi, x_msg));
            }
        }
        table
    }

    /// Load a table from a JSON file shaped like
    /// `{"beginner": {"EUR/USD": {"min": 40, "max": 60, "message": "..."}}}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop-loss table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse stop-loss table {}", path.display()))
    }

    pub fn insert(&mut self, level: RiskLevel, pair: CurrencyPair, recommendation: StopRecommendation) {
        self.bands.entry(level).or_default().insert(pair, recommendation);
    }

    pub fn get(&self, level: RiskLevel, pair: CurrencyPair) -> Option<&StopRecommendation> {
        self.bands.get(&level)?.get(&pair)
    }
}

impl Default for StopLossTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_bands() {
        let table = StopLossTable::standard();

        let rec = table.get(RiskLevel::Beginner, CurrencyPair::EurUsd).unwrap();
        assert_eq!((rec.min, rec.max), (40, 60));
        assert_eq!(rec.message, BEGINNER_MSG);

        let rec = table.get(RiskLevel::Beginner, CurrencyPair::UsdJpy).unwrap();
        assert_eq!((rec.min, rec.max), (35, 50));
        assert_eq!(rec.message, BEGINNER_MSG);

        let rec = table.get(RiskLevel::Experienced, CurrencyPair::GbpJpy).unwrap();
        assert_eq!((rec.min, rec.max), (40, 60));
        assert_eq!(rec.message, EXPERIENCED_CROSS_MSG);

        let rec = table.get(RiskLevel::Expert, CurrencyPair::UsdJpy).unwrap();
        assert_eq!((rec.min, rec.max), (10, 25));

        let rec = table.get(RiskLevel::Expert, CurrencyPair::EurJpy).unwrap();
        assert_eq!((rec.min, rec.max), (25, 45));
        assert_eq!(rec.message, EXPERT_CROSS_MSG);
    }

    #[test]
    fn test_every_band_present() {
        let table = StopLossTable::standard();
        for level in RiskLevel::ALL {
            for pair in CurrencyPair::ALL {
                assert!(table.get(level, pair).is_some(), "{} {}", level, pair);
            }
        }
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"expert": {"EUR/USD": {"min": 5, "max": 12, "message": "Scalping"}}}"#;
        let table: StopLossTable = serde_json::from_str(json).unwrap();

        let rec = table.get(RiskLevel::Expert, CurrencyPair::EurUsd).unwrap();
        assert_eq!(rec, &StopRecommendation::new(5, 12, "Scalping"));
        assert!(table.get(RiskLevel::Beginner, CurrencyPair::EurUsd).is_none());
    }
}
