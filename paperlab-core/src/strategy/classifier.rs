//! Trained-classifier strategy: gradient-boosted trees, refit every call.
//!
//! Each invocation labels the historical rows with next-day direction,
//! min-max scales the feature columns, fits a fresh boosted-trees model on
//! everything except the most recent row, and classifies that row. The
//! returned confidence is the training-set accuracy of the freshly fit
//! model — in-sample fit quality, not a held-out estimate. That is carried
//! forward as documented behavior; changing it would change the meaning of
//! reported statistics.
//!
//! Refitting from scratch at every walk-forward step is expensive but keeps
//! causality trivially correct: no state survives between calls.

use crate::domain::{Direction, FeatureRow, Prediction};
use crate::model::{GbtParams, GradientBoostedTrees, MinMaxScaler};

use super::{Strategy, StrategyError};

/// Minimum feature history required to train.
pub const MIN_TRAIN_ROWS: usize = 10;

pub struct GradientBoostStrategy {
    params: GbtParams,
}

impl GradientBoostStrategy {
    pub fn new() -> Self {
        Self {
            params: GbtParams::default(),
        }
    }

    pub fn with_params(params: GbtParams) -> Self {
        Self { params }
    }
}

impl Default for GradientBoostStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GradientBoostStrategy {
    fn name(&self) -> &str {
        "classifier"
    }

    fn predict(&self, history: &[FeatureRow]) -> Result<Prediction, StrategyError> {
        if history.len() < MIN_TRAIN_ROWS {
            return Err(StrategyError::InsufficientData {
                required: MIN_TRAIN_ROWS,
                got: history.len(),
            });
        }

        let features: Vec<Vec<f64>> = history.iter().map(|r| r.to_vector().to_vec()).collect();

        // Scaler sees the full slice including the inference row; training
        // does not (the latest row has no next-day label).
        let scaler = MinMaxScaler::fit(&features)?;
        let scaled = scaler.transform_all(&features)?;

        let n = history.len();
        let labels: Vec<bool> = (0..n - 1)
            .map(|i| history[i + 1].close > history[i].close)
            .collect();

        let train = &scaled[..n - 1];
        let model = GradientBoostedTrees::fit(train, &labels, &self.params)?;

        let mut correct = 0usize;
        for (row, &label) in train.iter().zip(&labels) {
            if model.predict(row)? == label {
                correct += 1;
            }
        }
        let accuracy = round2(correct as f64 / labels.len() as f64);

        let direction = if model.predict(&scaled[n - 1])? {
            Direction::Up
        } else {
            Direction::Down
        };

        Ok(Prediction {
            direction,
            confidence: accuracy,
        })
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
