//! Trader-supplied inputs for a single risk calculation.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Currency the trading account is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountCurrency {
    Usd,
    Eur,
    Gbp,
}

impl AccountCurrency {
    pub const ALL: [AccountCurrency; 3] = [Self::Usd, Self::Eur, Self::Gbp];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCurrency::Usd => "USD",
            AccountCurrency::Eur => "EUR",
            AccountCurrency::Gbp => "GBP",
        }
    }

    /// Display symbol used in front of money amounts.
    pub fn symbol(&self) -> &'static str {
        match self {
            AccountCurrency::Usd => "$",
            AccountCurrency::Eur => "€",
            AccountCurrency::Gbp => "£",
        }
    }
}

impl fmt::Display for AccountCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AccountCurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            other => Err(format!("unsupported account currency '{}' (expected USD, EUR or GBP)", other)),
        }
    }
}

/// Direction of the planned trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "BUY",
            TradeDirection::Sell => "SELL",
        }
    }
}

impl FromStr for TradeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "long" => Ok(Self::Buy),
            "sell" | "short" => Ok(Self::Sell),
            other => Err(format!("unknown trade direction '{}' (expected buy or sell)", other)),
        }
    }
}

/// Whether a pair contains USD (major) or is a non-USD cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairCategory {
    Major,
    Cross,
}

/// The supported currency pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CurrencyPair {
    #[serde(rename = "EUR/USD")]
    EurUsd,
    #[serde(rename = "GBP/USD")]
    GbpUsd,
    #[serde(rename = "USD/JPY")]
    UsdJpy,
    #[serde(rename = "AUD/USD")]
    AudUsd,
    #[serde(rename = "USD/CAD")]
    UsdCad,
    #[serde(rename = "NZD/USD")]
    NzdUsd,
    #[serde(rename = "GBP/JPY")]
    GbpJpy,
    #[serde(rename = "EUR/JPY")]
    EurJpy,
}

impl CurrencyPair {
    /// All pairs in the order they are offered to traders.
    pub const ALL: [CurrencyPair; 8] = [
        Self::EurUsd,
        Self::GbpUsd,
        Self::UsdJpy,
        Self::AudUsd,
        Self::UsdCad,
        Self::NzdUsd,
        Self::GbpJpy,
        Self::EurJpy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyPair::EurUsd => "EUR/USD",
            CurrencyPair::GbpUsd => "GBP/USD",
            CurrencyPair::UsdJpy => "USD/JPY",
            CurrencyPair::AudUsd => "AUD/USD",
            CurrencyPair::UsdCad => "USD/CAD",
            CurrencyPair::NzdUsd => "NZD/USD",
            CurrencyPair::GbpJpy => "GBP/JPY",
            CurrencyPair::EurJpy => "EUR/JPY",
        }
    }

    pub fn category(&self) -> PairCategory {
        match self {
            CurrencyPair::GbpJpy | CurrencyPair::EurJpy => PairCategory::Cross,
            _ => PairCategory::Major,
        }
    }

    pub fn is_jpy(&self) -> bool {
        self.as_str().contains("JPY")
    }

    /// Pips per whole unit of price: 100 for JPY pairs, 10000 otherwise.
    pub fn pip_multiplier(&self) -> Decimal {
        if self.is_jpy() {
            dec!(100)
        } else {
            dec!(10000)
        }
    }

    /// Decimal places used when displaying prices for this pair.
    pub fn price_precision(&self) -> u32 {
        if self.is_jpy() {
            3
        } else {
            5
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CurrencyPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], "/");
        let normalized = if normalized.len() == 6 && normalized.is_ascii() && !normalized.contains('/') {
            format!("{}/{}", &normalized[..3], &normalized[3..])
        } else {
            normalized
        };

        Self::ALL
            .iter()
            .copied()
            .find(|pair| pair.as_str() == normalized)
            .ok_or_else(|| format!("unsupported currency pair '{}'", s))
    }
}

/// Where the per-lot pip value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipValueMode {
    /// Look up the pip value table for the account currency and pair
    Standard,
    /// Use the trader-supplied custom pip value
    Custom,
}

impl FromStr for PipValueMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "custom" => Ok(Self::Custom),
            other => Err(format!("unknown pip value mode '{}' (expected standard or custom)", other)),
        }
    }
}

/// Snapshot of everything the trader entered for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inputs {
    /// Account balance in account currency units
    pub account_balance: Decimal,

    pub account_currency: AccountCurrency,

    /// Percent of the balance to risk on this trade (1 = 1%)
    pub risk_percentage: Decimal,

    pub trade_direction: TradeDirection,

    pub currency_pair: CurrencyPair,

    /// Planned entry price in quote units
    pub entry_price: Decimal,

    /// Planned stop-loss price in quote units
    pub stop_loss_price: Decimal,

    pub pip_value_mode: PipValueMode,

    /// Per-lot pip value, only used in custom mode
    pub custom_pip_value: Decimal,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            account_balance: dec!(10000),
            account_currency: AccountCurrency::Usd,
            risk_percentage: dec!(1),
            trade_direction: TradeDirection::Buy,
            currency_pair: CurrencyPair::EurUsd,
            entry_price: dec!(1.0850),
            stop_loss_price: dec!(1.0800),
            pip_value_mode: PipValueMode::Standard,
            custom_pip_value: dec!(10.00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_parsing() {
        assert_eq!("EUR/USD".parse::<CurrencyPair>().unwrap(), CurrencyPair::EurUsd);
        assert_eq!("usdjpy".parse::<CurrencyPair>().unwrap(), CurrencyPair::UsdJpy);
        assert_eq!("gbp-jpy".parse::<CurrencyPair>().unwrap(), CurrencyPair::GbpJpy);
        assert!("EUR/CHF".parse::<CurrencyPair>().is_err());
    }

    #[test]
    fn test_pip_multiplier() {
        assert_eq!(CurrencyPair::EurUsd.pip_multiplier(), dec!(10000));
        assert_eq!(CurrencyPair::UsdJpy.pip_multiplier(), dec!(100));
        assert_eq!(CurrencyPair::EurJpy.pip_multiplier(), dec!(100));
        assert_eq!(CurrencyPair::UsdCad.price_precision(), 5);
        assert_eq!(CurrencyPair::GbpJpy.price_precision(), 3);
    }

    #[test]
    fn test_categories() {
        let crosses: Vec<_> = CurrencyPair::ALL
            .iter()
            .filter(|p| p.category() == PairCategory::Cross)
            .collect();
        assert_eq!(crosses, vec![&CurrencyPair::GbpJpy, &CurrencyPair::EurJpy]);
    }

    #[test]
    fn test_inputs_json_shape() {
        let json = r#"{
            "accountBalance": "5000",
            "accountCurrency": "GBP",
            "riskPercentage": "0.5",
            "tradeDirection": "Sell",
            "currencyPair": "GBP/JPY",
            "entryPrice": "190.250",
            "stopLossPrice": "190.750",
            "pipValueMode": "custom",
            "customPipValue": "12.5"
        }"#;

        let inputs: Inputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.account_currency, AccountCurrency::Gbp);
        assert_eq!(inputs.trade_direction, TradeDirection::Sell);
        assert_eq!(inputs.currency_pair, CurrencyPair::GbpJpy);
        assert_eq!(inputs.pip_value_mode, PipValueMode::Custom);
        assert_eq!(inputs.custom_pip_value, dec!(12.5));
    }
}
