//! Feature pipeline — turns a raw price history into a feature table.
//!
//! `derive_features` validates the history (length, ordering, duplicate
//! dates), computes the eight derived columns with strictly causal
//! indicators, and drops every row where any derived field is not a finite
//! number. Dropped rows are removed, never null-filled: downstream code can
//! assume each `FeatureRow` is complete.
//!
//! Pure function of its input; calling it twice yields identical output.

use std::cmp::Ordering;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{FeatureRow, PricePoint};
use crate::indicators::{ema, rolling_std, rsi};

/// Minimum history length accepted by the pipeline.
pub const MIN_HISTORY: usize = 30;

/// Structured errors from feature derivation.
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("insufficient history: need at least {required} points, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("history is not chronological at {date}")]
    OutOfOrder { date: NaiveDate },

    #[error("duplicate date in history: {date}")]
    DuplicateDate { date: NaiveDate },
}

/// Derive the feature table from a chronological price history.
///
/// Rows with insufficient trailing history (the RSI window dominates: the
/// first 14 rows never survive) or an undefined derived value are dropped.
pub fn derive_features(history: &[PricePoint]) -> Result<Vec<FeatureRow>, FeatureError> {
    if history.len() < MIN_HISTORY {
        return Err(FeatureError::InsufficientData {
            required: MIN_HISTORY,
            got: history.len(),
        });
    }

    for pair in history.windows(2) {
        match pair[1].date.cmp(&pair[0].date) {
            Ordering::Greater => {}
            Ordering::Equal => {
                return Err(FeatureError::DuplicateDate {
                    date: pair[1].date,
                })
            }
            Ordering::Less => {
                return Err(FeatureError::OutOfOrder {
                    date: pair[1].date,
                })
            }
        }
    }

    let closes: Vec<f64> = history.iter().map(|p| p.close).collect();
    let volumes: Vec<f64> = history.iter().map(|p| p.volume).collect();

    let ema_10 = ema(&closes, 10);
    let ema_20 = ema(&closes, 20);
    let ema_12 = ema(&closes, 12);
    let ema_26 = ema(&closes, 26);
    let rsi_14 = rsi(&closes, 14);
    let volatility_5 = rolling_std(&closes, 5);

    let mut rows = Vec::with_capacity(history.len());
    for (i, point) in history.iter().enumerate() {
        let volume_change = if i == 0 {
            f64::NAN
        } else {
            pct_change(volumes[i - 1], volumes[i])
        };
        let prev_return = if i == 0 {
            f64::NAN
        } else {
            pct_change(closes[i - 1], closes[i])
        };
        let price_diff_3day = if i < 3 {
            f64::NAN
        } else {
            closes[i] - closes[i - 3]
        };

        let row = FeatureRow {
            date: point.date,
            close: point.close,
            volume: point.volume,
            ema_10: ema_10[i],
            ema_20: ema_20[i],
            rsi_14: rsi_14[i],
            macd: ema_12[i] - ema_26[i],
            volume_change,
            prev_return,
            price_diff_3day,
            price_volatility: volatility_5[i],
        };

        if row.is_complete() {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Fractional change vs. the previous value; undefined for a zero base.
fn pct_change(prev: f64, curr: f64) -> f64 {
    if prev == 0.0 {
        f64::NAN
    } else {
        (curr - prev) / prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Price history with enough variation that every row past the warmup
    /// window survives.
    fn make_history(n: usize) -> Vec<PricePoint> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        (0..n)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.7).sin() * 10.0 + i as f64 * 0.1;
                PricePoint {
                    date: base_date + chrono::Duration::days(i as i64),
                    close,
                    volume: 1_000.0 + (i as f64 * 1.3).cos().abs() * 500.0,
                }
            })
            .collect()
    }

    #[test]
    fn rejects_short_history() {
        let history = make_history(29);
        let err = derive_features(&history).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::InsufficientData { required: 30, got: 29 }
        ));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let mut history = make_history(40);
        history[5].date = history[4].date;
        assert!(matches!(
            derive_features(&history).unwrap_err(),
            FeatureError::DuplicateDate { .. }
        ));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let mut history = make_history(40);
        history.swap(10, 11);
        assert!(matches!(
            derive_features(&history).unwrap_err(),
            FeatureError::OutOfOrder { .. }
        ));
    }

    #[test]
    fn output_no_longer_than_input_and_ordered() {
        let history = make_history(60);
        let rows = derive_features(&history).unwrap();
        assert!(rows.len() <= history.len());
        assert!(rows.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn every_field_is_finite() {
        let history = make_history(60);
        for row in derive_features(&history).unwrap() {
            assert!(row.is_complete(), "incomplete row at {}", row.date);
        }
    }

    #[test]
    fn rsi_warmup_rows_are_dropped() {
        let history = make_history(60);
        let rows = derive_features(&history).unwrap();
        // The 14-delta RSI window dominates every other lookback.
        assert_eq!(rows.len(), 60 - 14);
        assert_eq!(rows[0].date, history[14].date);
    }

    #[test]
    fn idempotent() {
        let history = make_history(50);
        let first = derive_features(&history).unwrap();
        let second = derive_features(&history).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_prior_volume_drops_row() {
        let mut history = make_history(60);
        history[30].volume = 0.0;
        let rows = derive_features(&history).unwrap();
        // Row 31 has an undefined volume percent-change; row 30 itself is
        // still computable (its own change uses the prior day's volume).
        assert_eq!(rows.len(), 60 - 14 - 1);
        assert!(rows.iter().all(|r| r.date != history[31].date));
        assert!(rows.iter().any(|r| r.date == history[30].date));
    }

    #[test]
    fn monotonic_series_pins_rsi_at_100() {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let history: Vec<PricePoint> = (0..40)
            .map(|i| PricePoint {
                date: base_date + chrono::Duration::days(i as i64),
                close: 100.0 + i as f64,
                volume: 1_000.0 + i as f64,
            })
            .collect();
        let rows = derive_features(&history).unwrap();
        assert!(!rows.is_empty());
        for row in &rows {
            assert_eq!(row.rsi_14, 100.0);
        }
    }

    #[test]
    fn flat_series_has_no_defined_rsi_rows() {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let history: Vec<PricePoint> = (0..40)
            .map(|i| PricePoint {
                date: base_date + chrono::Duration::days(i as i64),
                close: 100.0,
                volume: 1_000.0,
            })
            .collect();
        let rows = derive_features(&history).unwrap();
        assert!(rows.is_empty());
    }
}
