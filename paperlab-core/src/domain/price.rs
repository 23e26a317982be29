//! PricePoint — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily closing price and volume for a single symbol.
///
/// One point per trading day, chronological, immutable once fetched.
/// Volume is kept as f64 because the volume percent-change feature is
/// computed directly from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

impl PricePoint {
    /// Returns true if the close is a positive finite number.
    pub fn is_sane(&self) -> bool {
        self.close.is_finite() && self.close > 0.0 && self.volume.is_finite() && self.volume >= 0.0
    }
}
