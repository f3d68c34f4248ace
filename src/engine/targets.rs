//! Profit targets at fixed reward:risk multiples of the stop distance.

use rust_decimal::Decimal;

use crate::models::{CurrencyPair, ProfitTarget, TradeDirection};

/// Reward multiples projected for every trade.
pub const REWARD_MULTIPLES: [u32; 3] = [1, 2, 3];

/// Project a target price and profit for each reward multiple.
pub fn profit_targets(
    entry_price: Decimal,
    stop_pips: Decimal,
    direction: TradeDirection,
    position_size: Decimal,
    pip_value: Decimal,
    pair: CurrencyPair,
) -> Vec<ProfitTarget> {
    let pip_multiplier = pair.pip_multiplier();

    REWARD_MULTIPLES
        .iter()
        .map(|&multiple| {
            let target_pips = stop_pips.saturating_mul(Decimal::from(multiple));
            let price_distance = target_pips / pip_multiplier;

            let target_price = match direction {
                TradeDirection::Buy => entry_price.saturating_add(price_distance),
                TradeDirection::Sell => entry_price.saturating_sub(price_distance),
            };

            ProfitTarget {
                ratio: format!("{}:1", multiple),
                multiple,
                target_price,
                projected_profit: target_pips.saturating_mul(pip_value).saturating_mul(position_size),
            }
        })
        .collect()
}
