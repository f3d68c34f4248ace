//! Data models for calculation inputs, results, and risk levels.

mod inputs;
mod results;
mod risk_level;

pub use inputs::{AccountCurrency, CurrencyPair, Inputs, PairCategory, PipValueMode, TradeDirection};
pub use results::{ProfitTarget, Results, StopRecommendation};
pub use risk_level::RiskLevel;
