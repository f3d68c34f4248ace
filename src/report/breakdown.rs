//! Full console breakdown of one calculation.

use std::fmt;

use rust_decimal::Decimal;

use crate::engine::{assess_stop, StopQuality};
use crate::models::{Inputs, PipValueMode, Results};

use super::{break_even_price, fixed, money, price, wage_hours};

/// Console view pairing the inputs with their results.
pub struct Breakdown<'a> {
    pub inputs: &'a Inputs,
    pub results: &'a Results,
    pub hourly_wage: Decimal,
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.inputs;
        let results = self.results;
        let pair = inputs.currency_pair;
        let currency = inputs.account_currency;

        writeln!(f, "\n{:=^56}", " POSITION SIZE ")?;
        writeln!(f, "Pair:            {} ({})", pair, inputs.trade_direction.as_str())?;
        writeln!(f, "Entry / Stop:    {} / {}", price(inputs.entry_price, pair), price(inputs.stop_loss_price, pair))?;
        writeln!(f)?;
        writeln!(f, "Position Size:   {} lots", fixed(results.position_size, 2))?;
        writeln!(f, "Risk Amount:     {}", money(results.risk_amount, currency))?;
        writeln!(f, "Stop Distance:   {} pips", fixed(results.stop_distance_pips, 1))?;
        let mode = match inputs.pip_value_mode {
            PipValueMode::Standard => "Standard",
            PipValueMode::Custom => "Custom",
        };
        writeln!(f, "Pip Value Used:  {} per lot ({})", money(results.pip_value, currency), mode)?;
        writeln!(f, "Risk Level:      {}", results.risk_level.label())?;
        writeln!(f, "                 {}", results.risk_level.description())?;

        if let Some(rec) = &results.stop_recommendation {
            let quality = assess_stop(results);
            writeln!(f)?;
            writeln!(f, "--- Stop Loss Recommendation ---")?;
            writeln!(f, "Recommended:     {}-{} pips", rec.min, rec.max)?;
            writeln!(f, "Your Stop:       {} pips", fixed(results.stop_distance_pips, 1))?;
            let marker = if quality == StopQuality::Good { "OK" } else { "WARN" };
            writeln!(f, "Assessment:      [{}] {}", marker, quality)?;
            writeln!(f, "Tip:             {}", rec.message)?;
        }

        if !results.profit_targets.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Profit Targets ---")?;
            for target in &results.profit_targets {
                writeln!(
                    f,
                    "{:<5} R:R  {:>12}  {:>12}",
                    target.ratio,
                    price(target.target_price, pair),
                    money(target.projected_profit, currency)
                )?;
            }
            writeln!(
                f,
                "Break-even:      {} (includes typical 1 pip spread)",
                fixed(break_even_price(inputs.entry_price, inputs.trade_direction), 5)
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "This risk equals {} or about {} hours of work at {}/hour",
            money(results.risk_amount, currency),
            fixed(wage_hours(results.risk_amount, self.hourly_wage), 1),
            money(self.hourly_wage, currency)
        )?;

        if results.has_errors() {
            writeln!(f)?;
            writeln!(f, "--- Validation Errors ---")?;
            for error in &results.validation_errors {
                writeln!(f, "  - {}", error)?;
            }
        }

        writeln!(f, "{:=^56}", "")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PipValueTable, StopLossTable};
    use crate::engine::compute;
    use crate::report::DEFAULT_HOURLY_WAGE;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_breakdown_valid_trade() {
        let inputs = Inputs::default();
        let results = compute(&inputs, &PipValueTable::standard(), &StopLossTable::standard());
        let text = Breakdown {
            inputs: &inputs,
            results: &results,
            hourly_wage: DEFAULT_HOURLY_WAGE,
        }
        .to_string();

        assert!(text.contains("Position Size:   0.20 lots"));
        assert!(text.contains("Pip Value Used:  $10.00 per lot (Standard)"));
        assert!(text.contains("Risk Level:      Beginner Safe Zone\n"));
        assert!(text.contains("Recommended for new traders learning risk management"));
        assert!(text.contains("Recommended:     40-60 pips"));
        assert!(text.contains("[OK] Within recommended range"));
        assert!(text.contains("Break-even:      1.08510"));
        assert!(text.contains("about 6.7 hours"));
        assert!(!text.contains("Validation Errors"));
    }

    #[test]
    fn test_breakdown_lists_errors() {
        let inputs = Inputs {
            stop_loss_price: dec!(1.0900),
            ..Inputs::default()
        };
        let results = compute(&inputs, &PipValueTable::standard(), &StopLossTable::standard());
        let text = Breakdown {
            inputs: &inputs,
            results: &results,
            hourly_wage: DEFAULT_HOURLY_WAGE,
        }
        .to_string();

        assert!(text.contains("--- Validation Errors ---"));
        assert!(text.contains("  - Stop loss must be below entry price for long trades"));
    }

    #[test]
    fn test_breakdown_survives_extreme_values() {
        let inputs = Inputs {
            account_balance: dec!(1000000000000),
            entry_price: Decimal::from_str("999999999999999999999999999").unwrap(),
            stop_loss_price: dec!(1),
            ..Inputs::default()
        };
        let results = compute(&inputs, &PipValueTable::standard(), &StopLossTable::standard());
        let text = Breakdown {
            inputs: &inputs,
            results: &results,
            hourly_wage: dec!(0.0000000000000000000001),
        }
        .to_string();

        assert!(text.contains("Entry / Stop:    999999999999999999999999999.00000 / 1.00000"));
        assert!(text.contains("about 79228162514264337593543950335.0 hours"));
    }
}
