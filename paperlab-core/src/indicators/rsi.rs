//! Relative Strength Index (RSI), trailing-window mean form.
//!
//! avg_gain = mean of positive deltas over the trailing `period` deltas,
//! avg_loss = mean of negative-delta magnitudes over the same window,
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss).
//! Lookback: period (one extra element for the first delta).
//! Edge cases: avg_loss == 0 with gains present -> RSI = 100 (the limit of
//! the ratio); a fully flat window (no gains, no losses) is undefined -> NaN.

/// Compute trailing-window RSI of a series.
pub fn rsi(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "RSI period must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period + 1 {
        return result;
    }

    let mut deltas = vec![f64::NAN; n];
    for i in 1..n {
        deltas[i] = values[i] - values[i - 1];
    }

    for i in period..n {
        let window = &deltas[i + 1 - period..=i];
        if window.iter().any(|d| d.is_nan()) {
            continue;
        }

        let gain: f64 = window.iter().filter(|&&d| d > 0.0).sum();
        let loss: f64 = -window.iter().filter(|&&d| d < 0.0).sum::<f64>();
        let avg_gain = gain / period as f64;
        let avg_loss = loss / period as f64;

        result[i] = if avg_loss == 0.0 {
            if avg_gain > 0.0 {
                100.0
            } else {
                f64::NAN // flat window, ratio undefined
            }
        } else {
            100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
        };
    }

    result
}
