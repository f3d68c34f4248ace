//! Output of one risk calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// Recommended stop distance band for a risk level and pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRecommendation {
    /// Lower bound of the band in pips
    pub min: u32,

    /// Upper bound of the band in pips
    pub max: u32,

    /// Advisory message shown alongside the band
    pub message: String,
}

impl StopRecommendation {
    pub fn new(min: u32, max: u32, message: &str) -> Self {
        Self {
            min,
            max,
            message: message.to_string(),
        }
    }
}

/// Price and projected profit at one reward:risk ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitTarget {
    /// Ratio label, e.g. "2:1"
    pub ratio: String,

    /// Reward multiple of the stop distance
    pub multiple: u32,

    pub target_price: Decimal,

    /// Profit in account currency if the target is hit
    pub projected_profit: Decimal,
}

/// Fully populated result of a calculation, including any validation errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    /// Account currency amount at risk
    pub risk_amount: Decimal,

    /// Distance between entry and stop in pips
    pub stop_distance_pips: Decimal,

    /// Per-lot pip value used for sizing
    pub pip_value: Decimal,

    /// Recommended size in standard lots
    pub position_size: Decimal,

    pub stop_recommendation: Option<StopRecommendation>,

    /// Targets in "1:1", "2:1", "3:1" order
    pub profit_targets: Vec<ProfitTarget>,

    /// Violations in the order they were detected
    pub validation_errors: Vec<String>,

    pub risk_level: RiskLevel,
}

impl Results {
    /// Whether downstream consumers can act on these results.
    pub fn is_actionable(&self) -> bool {
        self.validation_errors.is_empty() && self.position_size > Decimal::ZERO
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}
