// =============================================================================
// FX Signals — Main Entry Point
// =============================================================================
//
// EMA crossover signal server: per request it pulls 1-minute candles from
// Yahoo Finance for a fixed set of FX/commodity symbols, computes the 8/21
// EMA pair over closing prices, and reports a buy/sell/hold/neutral signal.
// =============================================================================

mod api;
mod app_state;
mod config;
mod error;
mod indicators;
mod signals;
mod types;
mod yahoo;

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = Config::load("config.json").unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    if let Ok(port) = std::env::var("PORT") {
        match port.parse() {
            Ok(p) => config.port = p,
            Err(_) => warn!(value = %port, "Invalid PORT value, keeping {}", config.port),
        }
    }

    info!(
        port = config.port,
        static_dir = %config.static_dir,
        short_period = config.short_period,
        long_period = config.long_period,
        "Configuration ready"
    );

    // ── 2. Shared state & router ─────────────────────────────────────────
    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config));
    let app = api::rest::router(state);

    // ── 3. Serve ─────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %bind_addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
