//! Feed connection configuration.

use serde::{Deserialize, Serialize};

use crate::adapter::outbound::dextools::stream::DEFAULT_WS_URL;
use crate::domain::chain::DEFAULT_CHAIN;

/// Which feed to connect to and how long sinks may take.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// WebSocket endpoint.
    #[serde(default = "default_url")]
    pub url: String,
    /// Chain name, one of the registry entries.
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Per-sink delivery timeout in seconds; 0 disables the bound.
    #[serde(default = "default_sink_timeout_secs")]
    pub sink_timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_WS_URL.to_string()
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

const fn default_sink_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            chain: default_chain(),
            sink_timeout_secs: default_sink_timeout_secs(),
        }
    }
}
