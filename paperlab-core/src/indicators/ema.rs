//! Exponential Moving Average (EMA), span-parameterized.
//!
//! Adjusted form: EMA[t] = sum_k (1-alpha)^k * x[t-k] / sum_k (1-alpha)^k
//! with alpha = 2 / (span + 1), the sum running over all history to date.
//! Equivalent recursion: num[t] = x[t] + (1-alpha)*num[t-1],
//! den[t] = 1 + (1-alpha)*den[t-1], EMA[t] = num[t]/den[t].
//! Defined from the first element; lookback 0.

/// Compute the span-weighted EMA of a series.
///
/// A NaN input taints every output from that index onward.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    let alpha = 2.0 / (span as f64 + 1.0);
    let decay = 1.0 - alpha;

    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            return result;
        }
        num = v + decay * num;
        den = 1.0 + decay * den;
        result[i] = num / den;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn ema_span_1_equals_input() {
        let result = ema(&[100.0, 200.0, 300.0], 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_span_3_known_values() {
        // alpha = 0.5, decay = 0.5
        // t0: 1/1 = 1.0
        // t1: (2 + 0.5*1) / (1 + 0.5*1) = 2.5/1.5
        // t2: (3 + 0.5*2.5) / (1 + 0.5*1.5) = 4.25/1.75
        let result = ema(&[1.0, 2.0, 3.0], 3);
        assert_approx(result[0], 1.0, DEFAULT_EPSILON);
        assert_approx(result[1], 2.5 / 1.5, DEFAULT_EPSILON);
        assert_approx(result[2], 4.25 / 1.75, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_converges_to_constant_input() {
        let values = vec![42.0; 50];
        let result = ema(&values, 10);
        for v in result {
            assert_approx(v, 42.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn ema_defined_from_first_element() {
        let result = ema(&[7.0, 8.0], 20);
        assert!(result[0].is_finite());
        assert!(result[1].is_finite());
    }

    #[test]
    fn ema_nan_input_taints_remaining_outputs() {
        let result = ema(&[1.0, f64::NAN, 3.0], 3);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
