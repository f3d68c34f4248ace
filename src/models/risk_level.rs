//! Risk level classification from the risk percentage.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Trader experience band implied by how much of the account is at risk.
///
/// Ordered by ascending risk. Each band includes its upper boundary, so
/// exactly 1% is still `Beginner` and exactly 2% is still `Experienced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Beginner,
    Experienced,
    Expert,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [Self::Beginner, Self::Experienced, Self::Expert];

    /// Classify a risk percentage (1 = 1% of balance).
    pub fn from_risk_pct(risk_pct: Decimal) -> Self {
        if risk_pct <= dec!(1) {
            Self::Beginner
        } else if risk_pct <= dec!(2) {
            Self::Experienced
        } else {
            Self::Expert
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Beginner => "beginner",
            RiskLevel::Experienced => "experienced",
            RiskLevel::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Beginner => "Beginner Safe Zone",
            RiskLevel::Experienced => "Experienced Traders Only",
            RiskLevel::Expert => "Expert/High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Beginner => "Recommended for new traders learning risk management",
            RiskLevel::Experienced => "For traders with proven track record and experience",
            RiskLevel::Expert => "Only for highly experienced traders with solid risk management",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
