//! Strategy seam — interchangeable predictors behind one trait.
//!
//! The engine only ever sees `&dyn Strategy`; concrete variants are selected
//! by value through `StrategyKind`, so adding a strategy never touches the
//! walk-forward loop. Strategies are stateless between invocations: each
//! `predict` call sees a feature history and nothing else.

pub mod classifier;
pub mod rsi_threshold;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FeatureRow, Prediction};
use crate::model::ModelError;

pub use classifier::GradientBoostStrategy;
pub use rsi_threshold::RsiThresholdStrategy;

/// Faults inside a strategy invocation.
///
/// The engine skips the offending step and carries on; these never abort a
/// whole run.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("insufficient feature history: need at least {required} rows, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("training failed: {0}")]
    Training(#[from] ModelError),
}

/// A predictor: feature history in, next-day directional forecast out.
///
/// `history` is everything up to and including "today"; implementations must
/// never assume more is coming (strict no-look-ahead).
pub trait Strategy: Send + Sync {
    /// Stable machine-readable name, used in results tables.
    fn name(&self) -> &str;

    /// Forecast the next day's direction from the given history.
    fn predict(&self, history: &[FeatureRow]) -> Result<Prediction, StrategyError>;
}

/// Value-level strategy selector (config files, CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Classifier,
    RsiThreshold,
}

impl StrategyKind {
    /// Every known strategy, in reporting order.
    pub fn all() -> [StrategyKind; 2] {
        [StrategyKind::Classifier, StrategyKind::RsiThreshold]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Classifier => "classifier",
            StrategyKind::RsiThreshold => "rsi_threshold",
        }
    }

    /// Build the concrete strategy for this kind.
    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Classifier => Box::new(GradientBoostStrategy::new()),
            StrategyKind::RsiThreshold => Box::new(RsiThresholdStrategy),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classifier" => Ok(StrategyKind::Classifier),
            "rsi_threshold" => Ok(StrategyKind::RsiThreshold),
            other => Err(format!(
                "unknown strategy '{other}'. Valid: classifier, rsi_threshold"
            )),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
