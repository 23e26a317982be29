//! Yahoo Finance price provider.
//!
//! Fetches daily close/volume series from Yahoo's v8 chart API with bounded
//! retry and exponential backoff. Yahoo has no official API and is subject
//! to unannounced format changes; parse failures surface as
//! `DataError::ResponseFormat` rather than panics.

use std::time::Duration;

use serde::Deserialize;

use super::provider::{DataError, PriceProvider, MIN_FETCH_POINTS};
use crate::domain::PricePoint;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Yahoo Finance price provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    max_retries: u32,
    base_delay: Duration,
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            max_retries: 3,
            base_delay: Duration::from_millis(500),
        }
    }

    /// Build the chart API URL for a trailing range of calendar days.
    fn chart_url(symbol: &str, days: usize) -> String {
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?range={days}d&interval=1d"
        )
    }

    /// Parse the chart API response into chronological price points.
    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<PricePoint>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormat(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormat("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormat("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| DataError::ResponseFormat("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormat("no quote data".into()))?;

        let mut points = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| DataError::ResponseFormat(format!("invalid timestamp: {ts}")))?;

            // Skip holiday/placeholder rows with no close
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);

            points.push(PricePoint {
                date,
                close,
                volume: volume as f64,
            });
        }

        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);

        if points.is_empty() {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }

        Ok(points)
    }

    fn fetch_with_retry(&self, symbol: &str, days: usize) -> Result<Vec<PricePoint>, DataError> {
        let url = Self::chart_url(symbol, days);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.base_delay * 2u32.pow(attempt - 1);
                std::thread::sleep(delay);
            }

            match self.client.get(&url).send() {
                Ok(resp) => {
                    let status = resp.status();

                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(DataError::SymbolNotFound {
                            symbol: symbol.to_string(),
                        });
                    }

                    if !status.is_success() {
                        last_error =
                            Some(DataError::Unreachable(format!("HTTP {status} for {symbol}")));
                        continue;
                    }

                    let chart: ChartResponse = resp.json().map_err(|e| {
                        DataError::ResponseFormat(format!(
                            "failed to parse response for {symbol}: {e}"
                        ))
                    })?;

                    return Self::parse_response(symbol, chart);
                }
                Err(e) => {
                    if e.is_connect() || e.is_timeout() {
                        last_error = Some(DataError::Unreachable(e.to_string()));
                        continue;
                    }
                    return Err(DataError::Unreachable(e.to_string()));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DataError::Unreachable("max retries exceeded".into())))
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(&self, symbol: &str, days: usize) -> Result<Vec<PricePoint>, DataError> {
        let points = self.fetch_with_retry(symbol, days)?;
        if points.len() < MIN_FETCH_POINTS {
            return Err(DataError::InsufficientData {
                got: points.len(),
                required: MIN_FETCH_POINTS,
            });
        }
        Ok(points)
    }
}
