//! Educational figures: what-if risk amounts, loss recovery, wage comparison, break-even.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::TradeDirection;

/// Hourly wage used to put a risk amount in perspective.
pub const DEFAULT_HOURLY_WAGE: Decimal = dec!(15);

const WHAT_IF_RISKS: [Decimal; 6] = [dec!(0.25), dec!(0.5), dec!(1), dec!(1.5), dec!(2), dec!(3)];
const RECOVERY_LOSSES: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Typical one-pip spread added to entry for the break-even price.
const SPREAD_ALLOWANCE: Decimal = dec!(0.0001);

/// Risk amount at one candidate risk percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIfRow {
    pub risk_pct: Decimal,
    pub amount: Decimal,
    pub band: &'static str,
}

/// Gain needed to recover from one drawdown size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryRow {
    pub loss_pct: u32,
    pub gain_needed_pct: u32,
}

fn band_label(risk_pct: Decimal) -> &'static str {
    if risk_pct <= dec!(1) {
        "Safe"
    } else if risk_pct <= dec!(2) {
        "Caution"
    } else {
        "High Risk"
    }
}

/// What the same balance would risk at each common risk percentage.
pub fn what_if_table(account_balance: Decimal) -> Vec<WhatIfRow> {
    WHAT_IF_RISKS
        .iter()
        .map(|&risk_pct| WhatIfRow {
            risk_pct,
            amount: account_balance.saturating_mul(risk_pct) / dec!(100),
            band: band_label(risk_pct),
        })
        .collect()
}

/// Percentage gain required to get back to break-even after each loss.
///
/// `gain = ceil(loss / (100 - loss) * 100)`.
pub fn recovery_table() -> Vec<RecoveryRow> {
    RECOVERY_LOSSES
        .iter()
        .map(|&loss_pct| {
            let loss = Decimal::from(loss_pct);
            let gain = (loss / (dec!(100) - loss) * dec!(100)).ceil();
            RecoveryRow {
                loss_pct,
                gain_needed_pct: gain.to_u32().unwrap_or(u32::MAX),
            }
        })
        .collect()
}

/// Hours of work at `hourly_wage` that the risk amount represents.
pub fn wage_hours(risk_amount: Decimal, hourly_wage: Decimal) -> Decimal {
    if hourly_wage <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    risk_amount.checked_div(hourly_wage).unwrap_or(Decimal::MAX)
}

/// Entry adjusted by one pip of spread in the trade direction.
pub fn break_even_price(entry_price: Decimal, direction: TradeDirection) -> Decimal {
    match direction {
        TradeDirection::Buy => entry_price.saturating_add(SPREAD_ALLOWANCE),
        TradeDirection::Sell => entry_price.saturating_sub(SPREAD_ALLOWANCE),
    }
}
