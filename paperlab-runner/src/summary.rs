//! Per-run summary statistics — pure functions over a step sequence.
//!
//! The engine reports raw steps; everything aggregate (final balance, hit
//! rate, profit) is computed here, at the reporting layer. Percentages and
//! balances are rounded to two decimals, matching how results are shown.

use serde::{Deserialize, Serialize};

use paperlab_core::domain::SimulationStep;

/// Aggregate statistics for one (symbol × strategy) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub prediction_count: usize,
    pub hit_count: usize,
    pub hit_rate_pct: f64,
    pub final_balance: f64,
    pub profit_pct: f64,
}

impl StrategySummary {
    /// Compute summary statistics from a step sequence.
    ///
    /// Returns None for an empty sequence — the caller reports those runs
    /// as "no data" rather than inventing zeros.
    pub fn from_steps(steps: &[SimulationStep], starting_balance: f64) -> Option<Self> {
        let last = steps.last()?;
        let hit_count = steps.iter().filter(|s| s.hit).count();

        Some(Self {
            prediction_count: steps.len(),
            hit_count,
            hit_rate_pct: round2(hit_count as f64 / steps.len() as f64 * 100.0),
            final_balance: round2(last.balance_after),
            profit_pct: round2(
                (last.balance_after - starting_balance) / starting_balance * 100.0,
            ),
        })
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
