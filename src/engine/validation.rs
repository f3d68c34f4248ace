//! Input checks. Violations are collected as messages, never raised.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AccountCurrency, Inputs, PipValueMode, TradeDirection};

/// Smallest tradable size in lots.
pub const MIN_LOT_SIZE: Decimal = dec!(0.01);

/// Sizes above this are flagged as oversized.
pub const MAX_ADVISED_LOTS: Decimal = dec!(2);

pub const MIN_CUSTOM_PIP_VALUE: Decimal = dec!(0.10);
pub const MAX_CUSTOM_PIP_VALUE: Decimal = dec!(100.00);

/// Ordered list of validation messages for one calculation.
#[derive(Debug, Default)]
pub struct Violations {
    messages: Vec<String>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Positivity checks on balance, risk, and both prices.
    pub fn check_amounts(&mut self, inputs: &Inputs) {
        if inputs.account_balance <= Decimal::ZERO {
            self.push("Account balance must be greater than 0");
        }
        if inputs.risk_percentage <= Decimal::ZERO {
            self.push("Risk percentage must be greater than 0");
        }
        if inputs.entry_price <= Decimal::ZERO {
            self.push("Entry price must be greater than 0");
        }
        if inputs.stop_loss_price <= Decimal::ZERO {
            self.push("Stop loss price must be greater than 0");
        }
    }

    /// The stop must sit on the losing side of entry.
    pub fn check_stop_side(&mut self, direction: TradeDirection, stop_distance: Decimal) {
        if stop_distance > Decimal::ZERO {
            return;
        }
        match direction {
            TradeDirection::Buy => self.push("Stop loss must be below entry price for long trades"),
            TradeDirection::Sell => self.push("Stop loss must be above entry price for short trades"),
        }
    }

    pub fn check_custom_pip_value(&mut self, inputs: &Inputs) {
        if inputs.pip_value_mode != PipValueMode::Custom {
            return;
        }
        let value = inputs.custom_pip_value;
        if value < MIN_CUSTOM_PIP_VALUE || value > MAX_CUSTOM_PIP_VALUE {
            self.push(custom_pip_message(inputs.account_currency));
        }
    }

    pub fn check_position_size(&mut self, position_size: Decimal) {
        if position_size > MAX_ADVISED_LOTS {
            self.push("Position size over 2 lots - consider reducing risk");
        }
        if position_size > Decimal::ZERO && position_size < MIN_LOT_SIZE {
            self.push("Position size below minimum trade size (0.01 lots)");
        }
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

fn custom_pip_message(currency: AccountCurrency) -> String {
    let symbol = currency.symbol();
    format!(
        "Custom pip value must be between {}0.10 and {}100.00",
        symbol, symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Violations {
        fn is_empty(&self) -> bool {
            self.messages.is_empty()
        }
    }

    #[test]
    fn test_amount_checks_keep_order() {
        let inputs = Inputs {
            account_balance: Decimal::ZERO,
            risk_percentage: dec!(-1),
            entry_price: Decimal::ZERO,
            stop_loss_price: dec!(-0.5),
            ..Inputs::default()
        };

        let mut violations = Violations::new();
        violations.check_amounts(&inputs);

        assert_eq!(
            violations.into_messages(),
            vec![
                "Account balance must be greater than 0",
                "Risk percentage must be greater than 0",
                "Entry price must be greater than 0",
                "Stop loss price must be greater than 0",
            ]
        );
    }

    #[test]
    fn test_custom_pip_bounds_inclusive() {
        for (value, ok) in [
            (dec!(0.10), true),
            (dec!(100.00), true),
            (dec!(0.09), false),
            (dec!(100.01), false),
        ] {
            let inputs = Inputs {
                pip_value_mode: PipValueMode::Custom,
                custom_pip_value: value,
                ..Inputs::default()
            };
            let mut violations = Violations::new();
            violations.check_custom_pip_value(&inputs);
            assert_eq!(violations.is_empty(), ok, "custom pip value {}", value);
        }
    }

    #[test]
    fn test_custom_pip_ignored_in_standard_mode() {
        let inputs = Inputs {
            custom_pip_value: dec!(500),
            ..Inputs::default()
        };
        let mut violations = Violations::new();
        violations.check_custom_pip_value(&inputs);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_custom_pip_message_uses_account_symbol() {
        assert_eq!(
            custom_pip_message(AccountCurrency::Gbp),
            "Custom pip value must be between £0.10 and £100.00"
        );
    }

    #[test]
    fn test_position_size_bounds() {
        let mut violations = Violations::new();
        violations.check_position_size(dec!(2));
        violations.check_position_size(dec!(0.01));
        violations.check_position_size(Decimal::ZERO);
        assert!(violations.is_empty());

        violations.check_position_size(dec!(2.01));
        violations.check_position_size(dec!(0.009));
        assert_eq!(
            violations.into_messages(),
            vec![
                "Position size over 2 lots - consider reducing risk",
                "Position size below minimum trade size (0.01 lots)",
            ]
        );
    }
}
