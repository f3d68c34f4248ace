//! Plain-text trade setup block for copying into a journal or broker ticket.

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::models::{Inputs, Results};

use super::{fixed, money, price};

/// Trade setup block for one calculation.
///
/// `generated_at` is passed in rather than read from the clock so the
/// output is reproducible.
pub struct TradeSummary<'a, Tz: TimeZone> {
    pub inputs: &'a Inputs,
    pub results: &'a Results,
    pub generated_at: &'a DateTime<Tz>,
}

impl<Tz> fmt::Display for TradeSummary<'_, Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.inputs;
        let results = self.results;
        let pair = inputs.currency_pair;
        let currency = inputs.account_currency;

        writeln!(f, "FOREX TRADE SETUP")?;
        writeln!(f, "=================")?;
        writeln!(f, "Pair: {}", pair)?;
        writeln!(f, "Direction: {}", inputs.trade_direction.as_str())?;
        writeln!(f, "Entry Price: {}", price(inputs.entry_price, pair))?;
        writeln!(f, "Stop Loss: {}", price(inputs.stop_loss_price, pair))?;
        writeln!(f)?;
        writeln!(f, "RISK MANAGEMENT")?;
        writeln!(f, "===============")?;
        writeln!(f, "Risk Amount: {}", money(results.risk_amount, currency))?;
        writeln!(f, "Risk %: {}%", inputs.risk_percentage.normalize())?;
        writeln!(f, "Stop Distance: {} pips", fixed(results.stop_distance_pips, 1))?;
        writeln!(f, "Position Size: {} lots", fixed(results.position_size, 2))?;
        writeln!(f)?;
        writeln!(f, "PROFIT TARGETS")?;
        writeln!(f, "==============")?;
        for target in &results.profit_targets {
            writeln!(
                f,
                "{} R:R - {} ({})",
                target.ratio,
                price(target.target_price, pair),
                money(target.projected_profit, currency)
            )?;
        }
        writeln!(f)?;
        write!(f, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Render the trade setup summary as text, without a trailing newline.
pub fn trade_summary<Tz>(inputs: &Inputs, results: &Results, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    TradeSummary {
        inputs,
        results,
        generated_at,
    }
    .to_string()
}
