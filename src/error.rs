// =============================================================================
// Error taxonomy for the signal pipeline
// =============================================================================
//
// Every step of the request pipeline (symbol resolution, upstream fetch,
// chart parsing, close extraction) yields one of these tagged errors instead
// of throwing; the `IntoResponse` impl maps each variant onto the exact
// status code and JSON body the API promises.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignalError {
    /// The requested symbol is not in the static symbol map.
    #[error("Unsupported symbol")]
    UnsupportedSymbol,

    /// The upstream request failed at the transport level, timed out, or
    /// came back with a non-success status.
    #[error("Failed to fetch data from Yahoo")]
    UpstreamUnavailable,

    /// The upstream response decoded, but `chart.result` was missing/empty.
    #[error("No chart data available")]
    NoChartData,

    /// The chart result carried no quote block or no close array.
    #[error("No close prices")]
    NoClosePrices,

    /// Fewer than the required number of valid closes remained.
    #[error("Not enough data points")]
    InsufficientData,

    /// Anything unexpected, surfaced with a diagnostic string.
    #[error("internal error")]
    Internal(anyhow::Error),
}

impl SignalError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedSymbol => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable
            | Self::NoChartData
            | Self::NoClosePrices
            | Self::InsufficientData => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SignalError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Internal(source) => {
                tracing::error!(error = %source, "internal error while handling request");
                json!({ "error": "internal error", "detail": source.to_string() })
            }
            other => {
                tracing::warn!(status = %status, error = %other, "request failed");
                json!({ "error": other.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
