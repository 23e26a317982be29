//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over data sources (Yahoo Finance,
//! in-memory fixtures) so the engine can be exercised without network
//! access and implementations can be swapped freely.

use thiserror::Error;

use crate::domain::PricePoint;

/// A fetch returning fewer points than this fails with
/// `DataError::InsufficientData`.
pub const MIN_FETCH_POINTS: usize = 30;

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("source unreachable: {0}")]
    Unreachable(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("insufficient data: got {got} points, need at least {required}")]
    InsufficientData { got: usize, required: usize },
}

/// Trait for daily price history sources.
///
/// `fetch` returns up to `days` trailing points, chronological, one per
/// trading day. Implementations must return at least `MIN_FETCH_POINTS`
/// points or fail.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch trailing daily prices for a symbol.
    fn fetch(&self, symbol: &str, days: usize) -> Result<Vec<PricePoint>, DataError>;
}

/// Provider that serves a fixed in-memory history for every symbol.
///
/// Used in tests and benchmarks; `fetch` returns the trailing `days` points
/// of the stored history.
pub struct StaticProvider {
    history: Vec<PricePoint>,
}

impl StaticProvider {
    pub fn new(history: Vec<PricePoint>) -> Self {
        Self { history }
    }
}

impl PriceProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, _symbol: &str, days: usize) -> Result<Vec<PricePoint>, DataError> {
        let start = self.history.len().saturating_sub(days);
        let window = &self.history[start..];
        if window.len() < MIN_FETCH_POINTS {
            return Err(DataError::InsufficientData {
                got: window.len(),
                required: MIN_FETCH_POINTS,
            });
        }
        Ok(window.to_vec())
    }
}
