//! Human-readable renderings of a calculation.

mod breakdown;
mod education;
mod summary;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AccountCurrency, CurrencyPair};

pub use breakdown::Breakdown;
pub use education::{break_even_price, recovery_table, wage_hours, what_if_table, DEFAULT_HOURLY_WAGE};
pub use summary::trade_summary;

/// Round half away from zero and render with exactly `dp` decimal places.
///
/// Values too wide to carry `dp` places in 96 bits are zero-padded as text.
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);

    let mut text = rounded.to_string();
    let scale = rounded.scale();
    if scale < dp {
        if scale == 0 {
            text.push('.');
        }
        text.push_str(&"0".repeat((dp - scale) as usize));
    }
    text
}

/// Price with the pair's display precision.
pub fn price(value: Decimal, pair: CurrencyPair) -> String {
    fixed(value, pair.price_precision())
}

/// Money amount with the account currency symbol, two decimals.
pub fn money(value: Decimal, currency: AccountCurrency) -> String {
    format!("{}{}", currency.symbol(), fixed(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_fixed_rounds_and_pads() {
        assert_eq!(fixed(dec!(0.2), 2), "0.20");
        assert_eq!(fixed(dec!(0.2222222), 2), "0.22");
        assert_eq!(fixed(dec!(0.125), 2), "0.13");
        assert_eq!(fixed(dec!(50), 1), "50.0");
        assert_eq!(fixed(dec!(-1.005), 2), "-1.01");
        assert_eq!(fixed(dec!(7), 0), "7");
    }

    #[test]
    fn test_fixed_pads_values_too_wide_to_rescale() {
        let wide = Decimal::from_str("999999999999999999999999999").unwrap();
        assert_eq!(fixed(wide, 5), "999999999999999999999999999.00000");
        assert_eq!(fixed(Decimal::MAX, 2), "79228162514264337593543950335.00");
        assert_eq!(fixed(Decimal::MIN, 1), "-79228162514264337593543950335.0");
        assert_eq!(price(wide, CurrencyPair::EurUsd), "999999999999999999999999999.00000");
    }

    #[test]
    fn test_price_precision() {
        assert_eq!(price(dec!(1.09), CurrencyPair::EurUsd), "1.09000");
        assert_eq!(price(dec!(150.5), CurrencyPair::UsdJpy), "150.500");
    }

    #[test]
    fn test_money_symbols() {
        assert_eq!(money(dec!(100), AccountCurrency::Usd), "$100.00");
        assert_eq!(money(dec!(12.345), AccountCurrency::Eur), "€12.35");
        assert_eq!(money(dec!(7.5), AccountCurrency::Gbp), "£7.50");
    }
}
