//! Forex Risk Calculator
//!
//! Sizes a forex position from account balance, risk tolerance, and the
//! planned entry and stop, then projects profit targets and grades the stop
//! against recommended ranges for the trader's risk level.

mod config;
mod data;
mod engine;
mod models;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::CalculatorConfig;
use crate::data::{PipValueTable, StopLossTable, DEFAULT_PIP_VALUE};
use crate::models::{
    AccountCurrency, CurrencyPair, Inputs, PairCategory, PipValueMode, RiskLevel, TradeDirection,
};
use crate::report::{fixed, money, recovery_table, trade_summary, what_if_table, Breakdown};

/// Forex position sizing and risk calculator CLI.
#[derive(Parser)]
#[command(name = "forex-risk")]
#[command(about = "Size forex positions from account risk, entry and stop", long_about = None)]
struct Cli {
    /// JSON config file with default inputs and table overrides
    #[arg(short, long, env = "FOREX_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate position size, profit targets and stop assessment
    Calc {
        /// Account balance in account currency
        #[arg(short, long, env = "FOREX_BALANCE")]
        balance: Option<Decimal>,

        /// Account currency (USD, EUR, GBP)
        #[arg(long, env = "FOREX_CURRENCY")]
        currency: Option<AccountCurrency>,

        /// Percent of balance to risk (1 = 1%)
        #[arg(short, long, env = "FOREX_RISK")]
        risk: Option<Decimal>,

        /// Trade direction (buy, sell)
        #[arg(short, long)]
        direction: Option<TradeDirection>,

        /// Currency pair, e.g. EUR/USD
        #[arg(short, long)]
        pair: Option<CurrencyPair>,

        /// Entry price
        #[arg(short, long)]
        entry: Option<Decimal>,

        /// Stop-loss price
        #[arg(short, long)]
        stop: Option<Decimal>,

        /// Pip value source (standard, custom)
        #[arg(long)]
        pip_mode: Option<PipValueMode>,

        /// Custom per-lot pip value; implies custom mode unless --pip-mode is given
        #[arg(long)]
        custom_pip: Option<Decimal>,

        /// JSON file replacing the built-in pip value table
        #[arg(long, env = "FOREX_PIP_TABLE")]
        pip_table: Option<PathBuf>,

        /// JSON file replacing the built-in stop-loss table
        #[arg(long, env = "FOREX_STOP_TABLE")]
        stop_table: Option<PathBuf>,

        /// Print inputs and results as JSON
        #[arg(long, conflicts_with = "summary")]
        json: bool,

        /// Print the copyable trade setup summary
        #[arg(long)]
        summary: bool,
    },

    /// Show the pip value and stop-loss reference tables
    Tables,

    /// Show risk amounts at common risk levels and loss recovery figures
    WhatIf {
        /// Account balance in account currency
        #[arg(short, long, env = "FOREX_BALANCE")]
        balance: Option<Decimal>,

        /// Account currency (USD, EUR, GBP)
        #[arg(long, env = "FOREX_CURRENCY")]
        currency: Option<AccountCurrency>,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging on stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_file(path)?,
        None => CalculatorConfig::default(),
    };

    match cli.command {
        Commands::Calc {
            balance,
            currency,
            risk,
            direction,
            pair,
            entry,
            stop,
            pip_mode,
            custom_pip,
            pip_table,
            stop_table,
            json,
            summary,
        } => {
            if pip_table.is_some() {
                config.pip_table_path = pip_table;
            }
            if stop_table.is_some() {
                config.stop_table_path = stop_table;
            }

            let defaults = &config.defaults;
            let inputs = Inputs {
                account_balance: balance.unwrap_or(defaults.account_balance),
                account_currency: currency.unwrap_or(defaults.account_currency),
                risk_percentage: risk.unwrap_or(defaults.risk_percentage),
                trade_direction: direction.unwrap_or(defaults.trade_direction),
                currency_pair: pair.unwrap_or(defaults.currency_pair),
                entry_price: entry.unwrap_or(defaults.entry_price),
                stop_loss_price: stop.unwrap_or(defaults.stop_loss_price),
                pip_value_mode: resolve_pip_mode(pip_mode, custom_pip, defaults.pip_value_mode),
                custom_pip_value: custom_pip.unwrap_or(defaults.custom_pip_value),
            };

            let (pip_values, stop_losses) = config.load_tables()?;

            info!(
                pair = %inputs.currency_pair,
                direction = inputs.trade_direction.as_str(),
                balance = %inputs.account_balance,
                risk_pct = %inputs.risk_percentage,
                "Calculating position size"
            );

            let results = engine::compute(&inputs, &pip_values, &stop_losses);
            for error in &results.validation_errors {
                warn!(error = %error, "Validation failed");
            }

            if json {
                let payload = serde_json::json!({
                    "inputs": inputs,
                    "results": results,
                    "actionable": results.is_actionable(),
                    "stopQuality": engine::assess_stop(&results),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if summary {
                if !results.is_actionable() {
                    eprintln!("Trade setup has validation errors; fix them before using the summary:");
                    for error in &results.validation_errors {
                        eprintln!("  - {}", error);
                    }
                    return Ok(ExitCode::from(2));
                }
                println!("{}", trade_summary(&inputs, &results, &Local::now()));
            } else {
                let view = Breakdown {
                    inputs: &inputs,
                    results: &results,
                    hourly_wage: config.hourly_wage,
                };
                println!("{}", view);
            }

            if !results.is_actionable() {
                return Ok(ExitCode::from(2));
            }
        }

        Commands::Tables => {
            let (pip_values, stop_losses) = config.load_tables()?;
            print_tables(&pip_values, &stop_losses);
        }

        Commands::WhatIf { balance, currency } => {
            let balance = balance.unwrap_or(config.defaults.account_balance);
            let currency = currency.unwrap_or(config.defaults.account_currency);

            println!("\n=== Risk Amount by Percentage ({}) ===\n", money(balance, currency));
            for row in what_if_table(balance) {
                println!(
                    "  {:>5}%  {:>12}  {}",
                    row.risk_pct.normalize(),
                    money(row.amount, currency),
                    row.band
                );
            }

            println!("\n=== Recovery After Loss ===\n");
            for row in recovery_table() {
                println!(
                    "  After {:>2}% loss  ->  need {:>2}% gain to recover",
                    row.loss_pct, row.gain_needed_pct
                );
            }
            println!("\nLarge losses become exponentially harder to recover from.");
        }

        Commands::Config => {
            let d = &config.defaults;

            println!("\n=== Default Inputs ===\n");
            println!("  Account Balance:   {}", money(d.account_balance, d.account_currency));
            println!("  Account Currency:  {}", d.account_currency);
            println!("  Risk:              {}%", d.risk_percentage.normalize());
            println!("  Direction:         {}", d.trade_direction.as_str());
            println!("  Pair:              {}", d.currency_pair);
            println!("  Entry Price:       {}", report::price(d.entry_price, d.currency_pair));
            println!("  Stop Loss:         {}", report::price(d.stop_loss_price, d.currency_pair));
            println!("  Pip Value Mode:    {:?}", d.pip_value_mode);
            println!("  Custom Pip Value:  {}", money(d.custom_pip_value, d.account_currency));

            println!("\n=== Reference Data ===\n");
            let describe = |path: &Option<PathBuf>| {
                path.as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string())
            };
            println!("  Pip Value Table:   {}", describe(&config.pip_table_path));
            println!("  Stop-Loss Table:   {}", describe(&config.stop_table_path));
            println!("  Hourly Wage:       {}", fixed(config.hourly_wage, 2));

            println!("\n=== Limits ===\n");
            println!(
                "  Custom Pip Value:  {} - {}",
                fixed(engine::MIN_CUSTOM_PIP_VALUE, 2),
                fixed(engine::MAX_CUSTOM_PIP_VALUE, 2)
            );
            println!("  Min Lot Size:      {}", engine::MIN_LOT_SIZE);
            println!("  Max Advised Lots:  {}", engine::MAX_ADVISED_LOTS);
            println!("  Reward Ratios:     {:?}", engine::REWARD_MULTIPLES);
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// An explicit mode wins; a custom pip value alone switches to custom mode.
fn resolve_pip_mode(
    explicit: Option<PipValueMode>,
    custom_pip: Option<Decimal>,
    default: PipValueMode,
) -> PipValueMode {
    match (explicit, custom_pip) {
        (Some(mode), _) => mode,
        (None, Some(_)) => PipValueMode::Custom,
        (None, None) => default,
    }
}

/// Print both reference tables in pair order.
fn print_tables(pip_values: &PipValueTable, stop_losses: &StopLossTable) {
    println!("\n=== Pip Values (per standard lot) ===\n");
    print!("  {:<9} {:<6}", "PAIR", "TYPE");
    for currency in AccountCurrency::ALL {
        print!(" {:>8}", currency);
    }
    println!();
    println!("  {}", "-".repeat(16 + 9 * AccountCurrency::ALL.len()));
    for pair in CurrencyPair::ALL {
        let category = match pair.category() {
            PairCategory::Major => "major",
            PairCategory::Cross => "cross",
        };
        print!("  {:<9} {:<6}", pair, category);
        for currency in AccountCurrency::ALL {
            let cell = match pip_values.get(currency, pair) {
                Some(value) => fixed(value, 2),
                None => format!("{}*", fixed(pip_values.lookup(currency, pair), 2)),
            };
            print!(" {:>8}", cell);
        }
        println!();
    }
    println!("  (* = missing entry, default {} used)", fixed(DEFAULT_PIP_VALUE, 2));

    for level in RiskLevel::ALL {
        println!("\n=== Stop-Loss Ranges: {} ===\n", level.label());
        for pair in CurrencyPair::ALL {
            match stop_losses.get(level, pair) {
                Some(rec) => println!("  {:<9} {:>3}-{:<3} pips  {}", pair, rec.min, rec.max, rec.message),
                None => println!("  {:<9} no recommendation", pair),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pip_mode_resolution() {
        assert_eq!(resolve_pip_mode(None, None, PipValueMode::Custom), PipValueMode::Custom);
        assert_eq!(
            resolve_pip_mode(Some(PipValueMode::Standard), None, PipValueMode::Custom),
            PipValueMode::Standard
        );
        assert_eq!(
            resolve_pip_mode(None, Some(dec!(12)), PipValueMode::Standard),
            PipValueMode::Custom
        );
        assert_eq!(
            resolve_pip_mode(Some(PipValueMode::Standard), Some(dec!(12)), PipValueMode::Custom),
            PipValueMode::Standard
        );
    }

    #[test]
    fn test_calc_accepts_pip_mode_flag() {
        let cli = Cli::try_parse_from(["forex-risk", "calc", "--pip-mode", "standard"]).unwrap();
        match cli.command {
            Commands::Calc { pip_mode, .. } => assert_eq!(pip_mode, Some(PipValueMode::Standard)),
            _ => panic!("expected calc"),
        }
    }
}
