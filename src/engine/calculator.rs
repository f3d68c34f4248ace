//! The risk engine: turns an inputs snapshot into a fully populated result.

use rust_decimal::Decimal;
use tracing::debug;

use crate::data::{PipValueTable, StopLossTable};
use crate::models::{Inputs, PipValueMode, Results, RiskLevel};

use super::position_sizer::{lots_for_risk, risk_amount, stop_distance, to_pips};
use super::targets::profit_targets;
use super::validation::Violations;

/// Pure calculator over a pair of read-only reference tables.
#[derive(Debug, Clone, Copy)]
pub struct RiskEngine<'a> {
    pip_values: &'a PipValueTable,
    stop_losses: &'a StopLossTable,
}

impl<'a> RiskEngine<'a> {
    pub fn new(pip_values: &'a PipValueTable, stop_losses: &'a StopLossTable) -> Self {
        Self {
            pip_values,
            stop_losses,
        }
    }

    /// Run one calculation.
    ///
    /// Never fails: every invalid condition is recorded in
    /// `validation_errors` and the remaining figures are still computed
    /// with safe fallbacks, so the result can always be rendered.
    pub fn compute(&self, inputs: &Inputs) -> Results {
        let mut violations = Violations::new();
        violations.check_amounts(inputs);

        let risk_amount = risk_amount(inputs.account_balance, inputs.risk_percentage);

        let distance = stop_distance(inputs.trade_direction, inputs.entry_price, inputs.stop_loss_price);
        violations.check_stop_side(inputs.trade_direction, distance);

        let stop_pips = to_pips(distance, inputs.currency_pair);

        let pip_value = self.resolve_pip_value(inputs);
        violations.check_custom_pip_value(inputs);

        // A stop on the wrong side of entry never yields a tradable size.
        let position_size = if distance > Decimal::ZERO {
            lots_for_risk(risk_amount, stop_pips, pip_value)
        } else {
            Decimal::ZERO
        };
        violations.check_position_size(position_size);

        let risk_level = RiskLevel::from_risk_pct(inputs.risk_percentage);
        let stop_recommendation = self.stop_losses.get(risk_level, inputs.currency_pair).cloned();

        let profit_targets = profit_targets(
            inputs.entry_price,
            stop_pips,
            inputs.trade_direction,
            position_size,
            pip_value,
            inputs.currency_pair,
        );

        let validation_errors = violations.into_messages();

        debug!(
            pair = %inputs.currency_pair,
            direction = inputs.trade_direction.as_str(),
            risk_amount = %risk_amount,
            stop_pips = %stop_pips,
            pip_value = %pip_value,
            position_size = %position_size,
            risk_level = %risk_level,
            errors = validation_errors.len(),
            "Risk calculation complete"
        );

        Results {
            risk_amount,
            stop_distance_pips: stop_pips,
            pip_value,
            position_size,
            stop_recommendation,
            profit_targets,
            validation_errors,
            risk_level,
        }
    }

    /// Per-lot pip value: the table entry in standard mode, the trader's value in custom mode.
    fn resolve_pip_value(&self, inputs: &Inputs) -> Decimal {
        match inputs.pip_value_mode {
            PipValueMode::Standard => self.pip_values.lookup(inputs.account_currency, inputs.currency_pair),
            PipValueMode::Custom => inputs.custom_pip_value,
        }
    }
}

/// Convenience wrapper for a one-off calculation.
pub fn compute(inputs: &Inputs, pip_values: &PipValueTable, stop_losses: &StopLossTable) -> Results {
    RiskEngine::new(pip_values, stop_losses).compute(inputs)
}
