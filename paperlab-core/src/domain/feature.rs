//! FeatureRow — a price point enriched with derived indicator columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of derived feature columns fed to a model.
pub const FEATURE_DIM: usize = 8;

/// One trading day with every derived field computed.
///
/// Rows only exist for dates where all eight derived fields are finite;
/// the feature pipeline drops incomplete rows instead of null-filling them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
    pub ema_10: f64,
    pub ema_20: f64,
    pub rsi_14: f64,
    pub macd: f64,
    pub volume_change: f64,
    pub prev_return: f64,
    pub price_diff_3day: f64,
    pub price_volatility: f64,
}

impl FeatureRow {
    /// The derived columns in model-input order.
    pub fn to_vector(&self) -> [f64; FEATURE_DIM] {
        [
            self.ema_10,
            self.ema_20,
            self.rsi_14,
            self.macd,
            self.volume_change,
            self.prev_return,
            self.price_diff_3day,
            self.price_volatility,
        ]
    }

    /// Returns true if every derived field is a finite number.
    pub fn is_complete(&self) -> bool {
        self.to_vector().iter().all(|v| v.is_finite())
    }
}
