//! In-crate learning primitives for the trained-classifier strategy.
//!
//! Deliberately small: a min-max feature scaler and a binary
//! gradient-boosted-trees classifier with a fixed seed. Everything here is
//! deterministic — identical inputs and seed produce an identical model.

pub mod boosted;
pub mod scaler;

use thiserror::Error;

pub use boosted::{GbtParams, GradientBoostedTrees};
pub use scaler::MinMaxScaler;

/// Structured errors from model fitting.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("empty training set")]
    EmptyTrainingSet,

    #[error("feature dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("labels/samples length mismatch: {samples} samples, {labels} labels")]
    LabelMismatch { samples: usize, labels: usize },
}
