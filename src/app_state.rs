// =============================================================================
// Shared Application State
// =============================================================================
//
// Built once at startup and shared via `Arc<AppState>` with every handler.
// Holds only immutable configuration and the upstream client; requests never
// mutate shared state, so there is no lock anywhere.
// =============================================================================

use std::sync::Arc;

use crate::config::Config;
use crate::yahoo::YahooClient;

pub struct AppState {
    pub config: Arc<Config>,
    pub yahoo: YahooClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let yahoo = YahooClient::new(config.yahoo_base_url.clone(), config.fetch_timeout_secs);
        Self {
            config: Arc::new(config),
            yahoo,
        }
    }
}
