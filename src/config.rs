// =============================================================================
// Process Configuration — immutable after startup
// =============================================================================
//
// Every tunable lives here. The config is loaded once in `main` (optional
// JSON file, `PORT` env override) and then shared read-only behind an `Arc`;
// nothing mutates it at runtime.
//
// All fields carry `#[serde(default)]` so a partial config file never breaks
// loading.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Static symbol map
// =============================================================================

/// Friendly symbol -> Yahoo Finance symbol. Compile-time constant; adding a
/// market means adding a row here and nothing else.
pub const SYMBOL_MAP: &[(&str, &str)] = &[
    ("EURUSD", "EURUSD=X"),
    ("GBPUSD", "GBPUSD=X"),
    ("XAUUSD", "XAUUSD=X"),
];

/// Resolve an upper-cased friendly symbol to its Yahoo symbol.
pub fn resolve_symbol(symbol: &str) -> Option<&'static str> {
    SYMBOL_MAP
        .iter()
        .find(|(friendly, _)| *friendly == symbol)
        .map(|(_, yahoo)| *yahoo)
}

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_yahoo_base_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

fn default_short_period() -> usize {
    8
}

fn default_long_period() -> usize {
    21
}

fn default_min_closes() -> usize {
    30
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_interval() -> String {
    "1m".to_string()
}

fn default_range() -> String {
    "1d".to_string()
}

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TCP port to listen on. `PORT` env always wins over the file value.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for any path the API does not match.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Base URL of the Yahoo chart API. Tests point this at a mock server.
    #[serde(default = "default_yahoo_base_url")]
    pub yahoo_base_url: String,

    /// Look-back of the fast EMA.
    #[serde(default = "default_short_period")]
    pub short_period: usize,

    /// Look-back of the slow EMA.
    #[serde(default = "default_long_period")]
    pub long_period: usize,

    /// Minimum number of valid closes required before computing a signal.
    #[serde(default = "default_min_closes")]
    pub min_closes: usize,

    /// Upstream fetch timeout in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Candle interval requested from the chart API.
    #[serde(default = "default_interval")]
    pub interval: String,

    /// Look-back range requested from the chart API.
    #[serde(default = "default_range")]
    pub range: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            yahoo_base_url: default_yahoo_base_url(),
            short_period: default_short_period(),
            long_period: default_long_period(),
            min_closes: default_min_closes(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            interval: default_interval(),
            range: default_range(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        info!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_endpoint_contract() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.short_period, 8);
        assert_eq!(config.long_period, 21);
        assert_eq!(config.min_closes, 30);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.interval, "1m");
        assert_eq!(config.range, "1d");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{ "port": 8080 }"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.short_period, 8);
        assert_eq!(config.yahoo_base_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn resolves_known_symbols() {
        assert_eq!(resolve_symbol("EURUSD"), Some("EURUSD=X"));
        assert_eq!(resolve_symbol("GBPUSD"), Some("GBPUSD=X"));
        assert_eq!(resolve_symbol("XAUUSD"), Some("XAUUSD=X"));
    }

    #[test]
    fn rejects_unknown_and_lowercase_symbols() {
        assert_eq!(resolve_symbol("JPYUSD"), None);
        // Lookup is exact; callers upper-case before resolving.
        assert_eq!(resolve_symbol("eurusd"), None);
    }
}
