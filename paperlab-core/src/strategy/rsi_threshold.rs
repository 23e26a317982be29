//! Rule-based strategy: a single RSI threshold.
//!
//! Up when the latest RSI(14) is above 50, down otherwise. No training,
//! deterministic, O(1); confidence is pinned at 0.5.

use crate::domain::{Direction, FeatureRow, Prediction};

use super::{Strategy, StrategyError};

/// RSI midline threshold.
const RSI_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct RsiThresholdStrategy;

impl Strategy for RsiThresholdStrategy {
    fn name(&self) -> &str {
        "rsi_threshold"
    }

    fn predict(&self, history: &[FeatureRow]) -> Result<Prediction, StrategyError> {
        let latest = history.last().ok_or(StrategyError::InsufficientData {
            required: 1,
            got: 0,
        })?;

        let direction = if latest.rsi_14 > RSI_THRESHOLD {
            Direction::Up
        } else {
            Direction::Down
        };

        Ok(Prediction {
            direction,
            confidence: 0.5,
        })
    }
}
