//! Calculator configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::{PipValueTable, StopLossTable};
use crate::models::Inputs;
use crate::report::DEFAULT_HOURLY_WAGE;

/// Configuration for the calculator front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Inputs used for any field not supplied on the command line
    pub defaults: Inputs,

    /// Optional JSON file replacing the built-in pip value table
    pub pip_table_path: Option<PathBuf>,

    /// Optional JSON file replacing the built-in stop-loss table
    pub stop_table_path: Option<PathBuf>,

    /// Hourly wage for the risk-in-perspective comparison
    pub hourly_wage: Decimal,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            defaults: Inputs::default(),
            pip_table_path: None,
            stop_table_path: None,
            hourly_wage: DEFAULT_HOURLY_WAGE,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded calculator config");
        Ok(config)
    }

    /// Build the reference tables, reading any configured overrides.
    pub fn load_tables(&self) -> Result<(PipValueTable, StopLossTable)> {
        let pip_values = match &self.pip_table_path {
            Some(path) => {
                info!(path = %path.display(), "Loading pip value table");
                PipValueTable::from_json_file(path)?
            }
            None => PipValueTable::standard(),
        };

        let stop_losses = match &self.stop_table_path {
            Some(path) => {
                info!(path = %path.display(), "Loading stop-loss table");
                StopLossTable::from_json_file(path)?
            }
            None => StopLossTable::standard(),
        };

        Ok((pip_values, stop_losses))
    }
}
