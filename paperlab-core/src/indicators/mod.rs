//! Causal indicator primitives over raw f64 series.
//!
//! All functions return one output per input element, NaN where the value is
//! not computable (insufficient trailing window, undefined division). The
//! feature pipeline treats NaN as "drop this row"; nothing downstream ever
//! sees a non-finite indicator value.

pub mod ema;
pub mod rsi;
pub mod volatility;

pub use ema::ema;
pub use rsi::rsi;
pub use volatility::rolling_std;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-9;
