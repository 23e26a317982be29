//! Rolling standard deviation (trailing window, sample variance).
//!
//! Lookback: window - 1. Divisor n-1, matching the usual sample estimator.

/// Compute the trailing sample standard deviation over `window` elements.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 2, "rolling_std window must be >= 2");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    for i in (window - 1)..n {
        let slice = &values[i + 1 - window..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance =
            slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        result[i] = variance.sqrt();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn rolling_std_known_values() {
        // std([1,2,3]) = std([2,3,4]) = 1.0 with the n-1 divisor
        let result = rolling_std(&[1.0, 2.0, 3.0, 4.0], 3);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 1.0, DEFAULT_EPSILON);
        assert_approx(result[3], 1.0, DEFAULT_EPSILON);
    }

    #[test]
    fn rolling_std_constant_series_is_zero() {
        let result = rolling_std(&[5.0; 10], 5);
        for v in &result[4..] {
            assert_approx(*v, 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn rolling_std_short_series_all_nan() {
        let result = rolling_std(&[1.0, 2.0], 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
