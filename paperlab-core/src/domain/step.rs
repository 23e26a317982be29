//! SimulationStep — one backtested day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Prediction;

/// The outcome of one walk-forward step.
///
/// `balance_after` derives deterministically from the previous step's
/// balance and this step's prediction/outcome. `hit` is the magnitude-gated
/// success flag: a correct direction call only counts when the realized move
/// clears the threshold, so small-move days are misses even when the sign
/// was right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    pub date: NaiveDate,
    pub prediction: Prediction,
    pub realized_return_pct: f64,
    pub balance_after: f64,
    pub hit: bool,
}
