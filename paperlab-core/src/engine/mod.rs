//! Walk-forward backtest engine.
//!
//! One run = one symbol × one strategy. The engine fetches a trailing price
//! history, derives features once, then replays the series day by day: at
//! each step the strategy sees only the causal prefix (everything up to and
//! including "today"), its forecast is scored against the next day's
//! realized return, and a running balance is updated with a fixed-fraction
//! stake.
//!
//! Failure policy is two-tier: fetch or feature-pipeline failures abort the
//! whole run with an empty result (the caller sees "no rows", never an
//! error); a strategy fault at a single step skips that step only. Nothing
//! in here panics on bad market data.
//!
//! Given an identical history and a deterministic strategy, the output is
//! reproducible bit for bit.

use serde::{Deserialize, Serialize};

use crate::data::provider::PriceProvider;
use crate::domain::{Direction, FeatureRow, SimulationStep};
use crate::features::derive_features;
use crate::strategy::Strategy;

/// Steps skipped at the start of the feature series before simulation.
pub const WARMUP_STEPS: usize = 20;
/// Capital is notionally divided into this many equal stake units.
pub const STAKE_DIVISOR: f64 = 20.0;
/// Magnitude a realized move must clear for a correct call to count as a hit.
pub const HIT_THRESHOLD_PCT: f64 = 3.0;
/// Extra trailing days fetched beyond the requested lookback.
pub const FETCH_PADDING_DAYS: usize = 30;
/// Default paper-trading bankroll.
pub const DEFAULT_STARTING_BALANCE: f64 = 100_000.0;

/// Per-run engine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub lookback_days: usize,
    pub starting_balance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback_days: 60,
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

/// Run a full backtest for one symbol: fetch, derive, simulate.
///
/// Fails soft: any fetch or feature-pipeline failure yields an empty step
/// sequence so a multi-symbol batch degrades to "fewer results" instead of
/// crashing.
pub fn run_backtest(
    provider: &dyn PriceProvider,
    symbol: &str,
    strategy: &dyn Strategy,
    config: &EngineConfig,
) -> Vec<SimulationStep> {
    let history = match provider.fetch(symbol, config.lookback_days + FETCH_PADDING_DAYS) {
        Ok(history) => history,
        Err(_) => return Vec::new(),
    };

    let features = match derive_features(&history) {
        Ok(features) => features,
        Err(_) => return Vec::new(),
    };

    walk_forward(&features, strategy, config.starting_balance)
}

/// The pure walk-forward loop over a precomputed feature series.
///
/// For each index i in [WARMUP_STEPS, len - 2]:
/// 1. the strategy predicts from the prefix `features[..=i]` — a failure
///    skips this step silently;
/// 2. the realized next-day return is (close[i+1] - close[i]) / close[i] × 100;
/// 3. stake = balance / STAKE_DIVISOR, P/L = ±stake × return / 100 with the
///    sign from the predicted direction (a correct "down" call on a falling
///    price profits, as a short would);
/// 4. hit iff the correct direction was called and the move cleared
///    ±HIT_THRESHOLD_PCT.
pub fn walk_forward(
    features: &[FeatureRow],
    strategy: &dyn Strategy,
    starting_balance: f64,
) -> Vec<SimulationStep> {
    let mut steps = Vec::new();
    if features.len() < WARMUP_STEPS + 2 {
        return steps;
    }

    let mut balance = starting_balance;
    for i in WARMUP_STEPS..features.len() - 1 {
        let prefix = &features[..=i];
        let prediction = match strategy.predict(prefix) {
            Ok(prediction) => prediction,
            Err(_) => continue,
        };

        let close_today = features[i].close;
        let close_next = features[i + 1].close;
        let realized_return_pct = (close_next - close_today) / close_today * 100.0;

        let stake = balance / STAKE_DIVISOR;
        balance += prediction.direction.sign() * stake * (realized_return_pct / 100.0);

        let hit = match prediction.direction {
            Direction::Up => realized_return_pct >= HIT_THRESHOLD_PCT,
            Direction::Down => realized_return_pct <= -HIT_THRESHOLD_PCT,
        };

        steps.push(SimulationStep {
            date: features[i].date,
            prediction,
            realized_return_pct,
            balance_after: balance,
            hit,
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::StaticProvider;
    use crate::domain::{PricePoint, Prediction};
    use crate::strategy::StrategyError;
    use chrono::NaiveDate;

    /// Strategy stub with a fixed direction.
    struct Always(Direction);

    impl Strategy for Always {
        fn name(&self) -> &str {
            "always"
        }

        fn predict(&self, _history: &[FeatureRow]) -> Result<Prediction, StrategyError> {
            Ok(Prediction {
                direction: self.0,
                confidence: 1.0,
            })
        }
    }

    /// Feature rows driven by an explicit close path; derived fields are
    /// placeholders since the stub strategies ignore them.
    fn make_rows(closes: &[f64]) -> Vec<FeatureRow> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| FeatureRow {
                date: base_date + chrono::Duration::days(i as i64),
                close,
                volume: 1_000.0,
                ema_10: close,
                ema_20: close,
                rsi_14: 55.0,
                macd: 0.0,
                volume_change: 0.0,
                prev_return: 0.0,
                price_diff_3day: 0.0,
                price_volatility: 1.0,
            })
            .collect()
    }

    /// Closes where every step after warmup moves by `step_pct` percent.
    fn closes_with_uniform_move(n: usize, step_pct: f64) -> Vec<f64> {
        let mut closes = vec![100.0];
        for _ in 1..n {
            let last = *closes.last().unwrap();
            closes.push(last * (1.0 + step_pct / 100.0));
        }
        closes
    }

    #[test]
    fn too_few_rows_yield_no_steps() {
        let rows = make_rows(&closes_with_uniform_move(21, 1.0));
        assert!(walk_forward(&rows, &Always(Direction::Up), 100_000.0).is_empty());
    }

    #[test]
    fn step_count_matches_walkable_range() {
        let rows = make_rows(&closes_with_uniform_move(30, 1.0));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);
        // i runs from 20 to 28 inclusive
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0].date, rows[20].date);
        assert_eq!(steps.last().unwrap().date, rows[28].date);
    }

    #[test]
    fn balance_recursion_holds_exactly() {
        let rows = make_rows(&closes_with_uniform_move(30, 1.0));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);

        let mut balance = 100_000.0;
        for step in &steps {
            let stake = balance / STAKE_DIVISOR;
            balance += stake * (step.realized_return_pct / 100.0);
            assert_eq!(step.balance_after, balance);
        }
    }

    #[test]
    fn down_call_on_falling_price_profits() {
        let rows = make_rows(&closes_with_uniform_move(30, -2.0));
        let steps = walk_forward(&rows, &Always(Direction::Down), 100_000.0);
        assert!(!steps.is_empty());
        for pair in steps.windows(2) {
            assert!(pair[1].balance_after > pair[0].balance_after);
        }
        assert!(steps[0].balance_after > 100_000.0);
    }

    #[test]
    fn up_call_on_falling_price_loses() {
        let rows = make_rows(&closes_with_uniform_move(30, -2.0));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);
        assert!(steps[0].balance_after < 100_000.0);
    }

    // ── Hit criterion boundaries ──
    //
    // Sawtooth paths keep each step's base at a round 100.0, so the exact
    // boundary returns (103 - 100) / 100 × 100 = 3.0 and
    // (97 - 100) / 100 × 100 = -3.0 are computed without drift.

    /// Closes alternating between 100.0 and `peak`.
    fn sawtooth(n: usize, peak: f64) -> Vec<f64> {
        (0..n)
            .map(|i| if i % 2 == 0 { 100.0 } else { peak })
            .collect()
    }

    #[test]
    fn up_hit_at_exactly_three_percent() {
        let rows = make_rows(&sawtooth(30, 103.0));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);
        let rising: Vec<_> = steps
            .iter()
            .filter(|s| s.realized_return_pct > 0.0)
            .collect();
        assert!(!rising.is_empty());
        for step in rising {
            assert_eq!(step.realized_return_pct, 3.0);
            assert!(step.hit, "3.0% move must count as a hit (inclusive)");
        }
    }

    #[test]
    fn up_miss_just_below_three_percent() {
        let rows = make_rows(&sawtooth(30, 102.999));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| !s.hit));
    }

    #[test]
    fn down_hit_at_exactly_minus_three_percent() {
        let rows = make_rows(&sawtooth(30, 97.0));
        let steps = walk_forward(&rows, &Always(Direction::Down), 100_000.0);
        let falling: Vec<_> = steps
            .iter()
            .filter(|s| s.realized_return_pct < 0.0)
            .collect();
        assert!(!falling.is_empty());
        for step in falling {
            assert_eq!(step.realized_return_pct, -3.0);
            assert!(step.hit, "-3.0% move must count as a hit (inclusive)");
        }
    }

    #[test]
    fn down_miss_just_above_minus_three_percent() {
        let rows = make_rows(&sawtooth(30, 97.001));
        let steps = walk_forward(&rows, &Always(Direction::Down), 100_000.0);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| !s.hit));
    }

    #[test]
    fn correct_direction_with_small_move_is_a_miss() {
        let rows = make_rows(&closes_with_uniform_move(30, 1.0));
        let steps = walk_forward(&rows, &Always(Direction::Up), 100_000.0);
        assert!(!steps.is_empty());
        assert!(steps.iter().all(|s| !s.hit));
        // but the balance still grew — hit and profit are separate notions
        assert!(steps.last().unwrap().balance_after > 100_000.0);
    }

    #[test]
    fn wrong_direction_on_large_move_is_a_miss() {
        let rows = make_rows(&closes_with_uniform_move(30, 5.0));
        let steps = walk_forward(&rows, &Always(Direction::Down), 100_000.0);
        assert!(steps.iter().all(|s| !s.hit));
    }

    // ── run_backtest fail-soft boundary ──

    #[test]
    fn short_fetch_yields_empty_result() {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let history: Vec<PricePoint> = (0..10)
            .map(|i| PricePoint {
                date: base_date + chrono::Duration::days(i as i64),
                close: 100.0 + i as f64,
                volume: 1_000.0,
            })
            .collect();
        let provider = StaticProvider::new(history);
        let steps = run_backtest(
            &provider,
            "SHORT",
            &Always(Direction::Up),
            &EngineConfig::default(),
        );
        assert!(steps.is_empty());
    }
}
