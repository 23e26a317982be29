//! Serializable batch configuration.
//!
//! The symbol basket is explicit configuration — there is no module-level
//! basket constant anywhere in the workspace. A config file fully describes
//! one batch: which symbols, which strategies, how far back, and with what
//! bankroll.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use paperlab_core::engine::{EngineConfig, DEFAULT_STARTING_BALANCE};
use paperlab_core::strategy::StrategyKind;

/// Errors from loading or validating a batch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config lists no symbols")]
    EmptyBasket,

    #[error("config lists no strategies")]
    EmptyStrategies,
}

/// Configuration for one batch run.
///
/// TOML shape:
/// ```toml
/// symbols = ["AKBNK.IS", "GARAN.IS", "THYAO.IS"]
/// strategies = ["classifier", "rsi_threshold"]
/// lookback_days = 60
/// starting_balance = 100000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub symbols: Vec<String>,

    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyKind>,

    #[serde(default = "default_lookback_days")]
    pub lookback_days: usize,

    #[serde(default = "default_starting_balance")]
    pub starting_balance: f64,
}

fn default_strategies() -> Vec<StrategyKind> {
    StrategyKind::all().to_vec()
}

fn default_lookback_days() -> usize {
    60
}

fn default_starting_balance() -> f64 {
    DEFAULT_STARTING_BALANCE
}

impl BatchConfig {
    /// Parse a TOML string and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: BatchConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyBasket);
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::EmptyStrategies);
        }
        Ok(())
    }

    /// Per-run engine parameters derived from this config.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            lookback_days: self.lookback_days,
            starting_balance: self.starting_balance,
        }
    }
}
