//! Batch orchestration — every symbol against every strategy.
//!
//! Each (symbol × strategy) run is independent and owns its own balance
//! state, so the fan-out is embarrassingly parallel: rayon distributes runs
//! across the pool and no locking is needed anywhere. A run that produces
//! no steps (fetch failure, thin history) becomes an explicit NoData row —
//! reported, never silently omitted, and never an error that aborts the
//! rest of the batch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use paperlab_core::data::provider::PriceProvider;
use paperlab_core::engine::run_backtest;
use paperlab_core::strategy::StrategyKind;

use crate::config::BatchConfig;
use crate::progress::BatchProgress;
use crate::summary::StrategySummary;

/// What a single run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed(StrategySummary),
    NoData,
}

impl RunOutcome {
    pub fn summary(&self) -> Option<&StrategySummary> {
        match self {
            RunOutcome::Completed(summary) => Some(summary),
            RunOutcome::NoData => None,
        }
    }
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub symbol: String,
    pub strategy: StrategyKind,
    pub outcome: RunOutcome,
}

/// Run the whole batch and return the sorted results table.
///
/// Rows are ordered by profit descending; NoData rows sort last. Ties fall
/// back to (symbol, strategy) so the table is deterministic regardless of
/// which worker finished first.
pub fn run_batch(
    provider: &dyn PriceProvider,
    config: &BatchConfig,
    progress: &dyn BatchProgress,
) -> Vec<BatchRow> {
    let pairs: Vec<(&str, StrategyKind)> = config
        .symbols
        .iter()
        .flat_map(|symbol| {
            config
                .strategies
                .iter()
                .map(move |&kind| (symbol.as_str(), kind))
        })
        .collect();
    let total = pairs.len();
    let engine_config = config.engine_config();

    let mut rows: Vec<BatchRow> = pairs
        .par_iter()
        .enumerate()
        .map(|(index, &(symbol, kind))| {
            progress.on_start(symbol, kind.name(), index, total);

            let strategy = kind.build();
            let steps = run_backtest(provider, symbol, strategy.as_ref(), &engine_config);
            let outcome = match StrategySummary::from_steps(&steps, engine_config.starting_balance)
            {
                Some(summary) => RunOutcome::Completed(summary),
                None => RunOutcome::NoData,
            };

            progress.on_complete(symbol, kind.name(), &outcome);
            BatchRow {
                symbol: symbol.to_string(),
                strategy: kind,
                outcome,
            }
        })
        .collect();

    sort_rows(&mut rows);

    let completed = rows.iter().filter(|r| r.outcome.summary().is_some()).count();
    progress.on_batch_complete(completed, total - completed, total);

    rows
}

/// Sort by profit descending, NoData last, then (symbol, strategy).
pub fn sort_rows(rows: &mut [BatchRow]) {
    rows.sort_by(|a, b| {
        let key_a = a.outcome.summary().map(|s| s.profit_pct);
        let key_b = b.outcome.summary().map(|s| s.profit_pct);
        match (key_a, key_b) {
            (Some(pa), Some(pb)) => pb
                .partial_cmp(&pa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
                .then_with(|| a.strategy.name().cmp(b.strategy.name())),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a
                .symbol
                .cmp(&b.symbol)
                .then_with(|| a.strategy.name().cmp(b.strategy.name())),
        }
    });
}
