//! Per-lot pip values by account currency and pair.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{AccountCurrency, CurrencyPair};

/// Pip value used when the table has no entry for a currency/pair combination.
pub const DEFAULT_PIP_VALUE: Decimal = dec!(10.00);

/// Static lookup of the value of one pip on one standard lot,
/// in account currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipValueTable {
    values: BTreeMap<AccountCurrency, BTreeMap<CurrencyPair, Decimal>>,
}

impl PipValueTable {
    /// Create an empty table. Every lookup falls back to [`DEFAULT_PIP_VALUE`].
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// The built-in reference values.
    pub fn standard() -> Self {
        use CurrencyPair::*;

        let rows: [(CurrencyPair, [Decimal; 3]); 8] = [
            //          USD          EUR          GBP
            (EurUsd, [dec!(10.00), dec!(8.50), dec!(7.50)]),
            (GbpUsd, [dec!(10.00), dec!(8.50), dec!(7.50)]),
            (AudUsd, [dec!(10.00), dec!(8.50), dec!(7.50)]),
            (NzdUsd, [dec!(10.00), dec!(8.50), dec!(7.50)]),
            (UsdCad, [dec!(7.50), dec!(6.50), dec!(5.50)]),
            (UsdJpy, [dec!(9.00), dec!(7.50), dec!(6.50)]),
            (EurJpy, [dec!(6.50), dec!(10.00), dec!(5.50)]),
            (GbpJpy, [dec!(8.00), dec!(7.00), dec!(10.00)]),
        ];

        let mut table = Self::empty();
        for (pair, per_currency) in rows {
            for (currency, value) in AccountCurrency::ALL.into_iter().zip(per_currency) {
                table.insert(currency, pair, value);
            }
        }
        table
    }

    /// Load a table from a JSON file shaped like `{"USD": {"EUR/USD": 10.0}}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pip value table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse pip value table {}", path.display()))
    }

    pub fn insert(&mut self, currency: AccountCurrency, pair: CurrencyPair, value: Decimal) {
        self.values.entry(currency).or_default().insert(pair, value);
    }

    /// Usable table entry, if present. Zero or negative entries count as missing.
    pub fn get(&self, currency: AccountCurrency, pair: CurrencyPair) -> Option<Decimal> {
        self.values
            .get(&currency)?
            .get(&pair)
            .copied()
            .filter(|value| *value > Decimal::ZERO)
    }

    /// Table entry, or [`DEFAULT_PIP_VALUE`] when the combination is missing or unusable.
    pub fn lookup(&self, currency: AccountCurrency, pair: CurrencyPair) -> Decimal {
        self.get(currency, pair).unwrap_or(DEFAULT_PIP_VALUE)
    }
}

impl Default for PipValueTable {
    fn default() -> Self {
        Self::standard()
    }
}
