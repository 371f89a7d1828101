// =============================================================================
// Yahoo Finance Chart Client — unauthenticated GET with fixed timeout
// =============================================================================
//
// Fetches 1-minute candles via the public chart endpoint:
//
//   GET {base}/v8/finance/chart/{symbol}?interval=1m&range=1d
//
// The response envelope is deserialized into typed structs with explicit
// absence handling: a missing `chart.result` and a missing `quote`/`close`
// are distinct failures with distinct error bodies. Upstream nulls inside the
// close array become `None` and are dropped during extraction.
// =============================================================================

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SignalError;

/// Yahoo chart response envelope: `{ "chart": { "result": [...] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// `null` on upstream errors, otherwise a one-element array.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quote {
    /// Per-minute closes; individual entries are `null` for gaps.
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
}

impl ChartResult {
    /// Extract the valid closing prices in chronological order, dropping
    /// nulls and NaN entries.
    pub fn closes(&self) -> Result<Vec<f64>, SignalError> {
        let quote = self
            .indicators
            .quote
            .first()
            .ok_or(SignalError::NoClosePrices)?;
        let close = quote.close.as_ref().ok_or(SignalError::NoClosePrices)?;

        Ok(close
            .iter()
            .filter_map(|v| *v)
            .filter(|v| !v.is_nan())
            .collect())
    }
}

// =============================================================================
// Client
// =============================================================================

/// Thin client over the Yahoo chart endpoint.
#[derive(Clone)]
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a new `YahooClient`.
    ///
    /// # Arguments
    /// * `base_url` — endpoint root, no trailing slash. Tests substitute a
    ///   mock server here.
    /// * `timeout_secs` — per-request timeout; a slow upstream fails the
    ///   request terminally, there is no retry.
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Fetch the chart for a Yahoo symbol and unwrap it down to the single
    /// `ChartResult` the endpoint returns.
    pub async fn fetch_chart(
        &self,
        yahoo_symbol: &str,
        interval: &str,
        range: &str,
    ) -> Result<ChartResult, SignalError> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval={}&range={}",
            self.base_url, yahoo_symbol, interval, range
        );
        debug!(url = %url, "fetching chart data");

        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!(symbol = %yahoo_symbol, error = %e, "upstream request failed");
            SignalError::UpstreamUnavailable
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(symbol = %yahoo_symbol, status = %status, "upstream returned error status");
            return Err(SignalError::UpstreamUnavailable);
        }

        // A body that is not valid JSON (or not the envelope shape) is an
        // unexpected failure, not a provider-data condition.
        let envelope: ChartEnvelope = resp
            .json()
            .await
            .map_err(|e| SignalError::Internal(e.into()))?;

        envelope
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.swap_remove(0))
                }
            })
            .ok_or(SignalError::NoChartData)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ChartEnvelope {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn parses_a_normal_envelope() {
        let envelope = parse(
            r#"{"chart":{"result":[{"timestamp":[1,2,3],
                "indicators":{"quote":[{"close":[1.1,null,1.3]}]}}],"error":null}}"#,
        );
        let results = envelope.chart.result.unwrap();
        assert_eq!(results.len(), 1);
        let closes = results[0].closes().unwrap();
        assert_eq!(closes, vec![1.1, 1.3]);
    }

    #[test]
    fn null_result_maps_to_none() {
        let envelope = parse(r#"{"chart":{"result":null,"error":{"code":"Not Found"}}}"#);
        assert!(envelope.chart.result.is_none());
    }

    #[test]
    fn missing_quote_is_no_close_prices() {
        let envelope = parse(r#"{"chart":{"result":[{"indicators":{"quote":[]}}]}}"#);
        let result = &envelope.chart.result.unwrap()[0];
        assert!(matches!(result.closes(), Err(SignalError::NoClosePrices)));
    }

    #[test]
    fn missing_close_array_is_no_close_prices() {
        let envelope = parse(r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}]}}"#);
        let result = &envelope.chart.result.unwrap()[0];
        assert!(matches!(result.closes(), Err(SignalError::NoClosePrices)));
    }

    #[test]
    fn closes_preserve_order_and_drop_gaps() {
        let envelope = parse(
            r#"{"chart":{"result":[{"indicators":{"quote":[
                {"close":[null,2.0,null,3.0,1.0,null]}]}}]}}"#,
        );
        let result = &envelope.chart.result.unwrap()[0];
        assert_eq!(result.closes().unwrap(), vec![2.0, 3.0, 1.0]);
    }
}
