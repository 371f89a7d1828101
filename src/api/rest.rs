// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// Two routes plus a static-file fallback:
//
//   GET /health              — liveness probe, no upstream call
//   GET /signals/:symbol     — fetch closes, compute EMAs, derive signal
//   (anything else)          — served from the static directory
//
// CORS is configured permissively; the dashboard page is served from the
// same process.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::info;

use crate::app_state::AppState;
use crate::config;
use crate::error::SignalError;
use crate::indicators::ema::ema_series;
use crate::signals::crossover_signal;
use crate::types::Signal;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full router with CORS, the static-file fallback, and shared
/// state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health))
        .route("/signals/:symbol", get(get_signal))
        .fallback_service(static_files)
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    server_time: i64,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        server_time: Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Signals
// =============================================================================

/// Response body for a successful signal computation. Field names are part
/// of the wire contract consumed by the dashboard.
#[derive(Debug, Serialize)]
pub struct SignalReport {
    pub symbol: String,
    pub yahoo_symbol: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "lastClose")]
    pub last_close: f64,
    pub signal: Signal,
    #[serde(rename = "emaShort")]
    pub ema_short: Option<f64>,
    #[serde(rename = "emaLong")]
    pub ema_long: Option<f64>,
}

/// GET /signals/:symbol
///
/// Pipeline: resolve symbol → fetch chart → extract closes → require enough
/// data → EMA(short), EMA(long) → crossover signal. Each step yields a tagged
/// `SignalError` on failure; nothing here retries.
async fn get_signal(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<SignalReport>, SignalError> {
    let symbol = symbol.to_uppercase();
    let yahoo_symbol =
        config::resolve_symbol(&symbol).ok_or(SignalError::UnsupportedSymbol)?;

    let chart = state
        .yahoo
        .fetch_chart(yahoo_symbol, &state.config.interval, &state.config.range)
        .await?;

    let closes = chart.closes()?;
    if closes.len() < state.config.min_closes {
        return Err(SignalError::InsufficientData);
    }

    let ema_short = ema_series(&closes, state.config.short_period);
    let ema_long = ema_series(&closes, state.config.long_period);
    let last = closes.len() - 1;
    let signal = crossover_signal(&ema_short, &ema_long, last);

    info!(
        symbol = %symbol,
        signal = %signal,
        closes = closes.len(),
        last_close = closes[last],
        "signal computed"
    );

    Ok(Json(SignalReport {
        symbol,
        yahoo_symbol: yahoo_symbol.to_string(),
        time: Utc::now(),
        last_close: closes[last],
        signal,
        ema_short: ema_short[last],
        ema_long: ema_long[last],
    }))
}
