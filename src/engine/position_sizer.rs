//! Risk-based position sizing: stop distance, pip conversion, lot size.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{CurrencyPair, TradeDirection};

/// Amount of account currency put at risk: `balance * risk_pct / 100`.
pub fn risk_amount(account_balance: Decimal, risk_pct: Decimal) -> Decimal {
    account_balance.saturating_mul(risk_pct) / dec!(100)
}

/// Signed distance from entry to stop in price units.
///
/// Positive when the stop sits on the losing side of the entry
/// (below for a long, above for a short).
pub fn stop_distance(direction: TradeDirection, entry_price: Decimal, stop_loss_price: Decimal) -> Decimal {
    match direction {
        TradeDirection::Buy => entry_price.saturating_sub(stop_loss_price),
        TradeDirection::Sell => stop_loss_price.saturating_sub(entry_price),
    }
}

/// Convert a price distance to pips for the pair. Always non-negative.
pub fn to_pips(price_distance: Decimal, pair: CurrencyPair) -> Decimal {
    price_distance.abs().saturating_mul(pair.pip_multiplier())
}

/// Lots such that hitting the stop loses exactly `risk_amount`.
///
/// `stop_pips * pip_value` is the loss per lot at the stop, so
/// `risk_amount / (stop_pips * pip_value)` equalizes the two. Returns zero
/// when there is no positive loss per lot to divide by.
pub fn lots_for_risk(risk_amount: Decimal, stop_pips: Decimal, pip_value: Decimal) -> Decimal {
    if stop_pips <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let loss_per_lot = stop_pips.saturating_mul(pip_value);
    if loss_per_lot <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    risk_amount.checked_div(loss_per_lot).unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_amount() {
        assert_eq!(risk_amount(dec!(10000), dec!(1)), dec!(100));
        assert_eq!(risk_amount(dec!(2500), dec!(0.25)), dec!(6.25));
        assert_eq!(risk_amount(dec!(10000), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_stop_distance_is_direction_aware() {
        assert_eq!(stop_distance(TradeDirection::Buy, dec!(1.0850), dec!(1.0800)), dec!(0.0050));
        assert_eq!(stop_distance(TradeDirection::Buy, dec!(1.0800), dec!(1.0850)), dec!(-0.0050));
        assert_eq!(stop_distance(TradeDirection::Sell, dec!(1.0800), dec!(1.0850)), dec!(0.0050));
        assert_eq!(stop_distance(TradeDirection::Sell, dec!(1.0850), dec!(1.0800)), dec!(-0.0050));
    }

    #[test]
    fn test_to_pips() {
        assert_eq!(to_pips(dec!(0.0050), CurrencyPair::EurUsd), dec!(50));
        assert_eq!(to_pips(dec!(-0.0050), CurrencyPair::EurUsd), dec!(50));
        assert_eq!(to_pips(dec!(0.50), CurrencyPair::UsdJpy), dec!(50));
    }

    #[test]
    fn test_lots_for_risk() {
        assert_eq!(lots_for_risk(dec!(100), dec!(50), dec!(10)), dec!(0.2));
        assert_eq!(lots_for_risk(dec!(100), dec!(50), dec!(9)).round_dp(4), dec!(0.2222));
    }

    #[test]
    fn test_lots_for_risk_never_divides_by_zero() {
        assert_eq!(lots_for_risk(dec!(100), Decimal::ZERO, dec!(10)), Decimal::ZERO);
        assert_eq!(lots_for_risk(dec!(100), dec!(50), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(lots_for_risk(dec!(100), dec!(-5), dec!(10)), Decimal::ZERO);
    }
}
