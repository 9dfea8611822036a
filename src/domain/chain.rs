//! Registry of chains the pool feed can report on.
//!
//! Each user-facing chain name maps to the two protocol parameters the feed
//! needs in its subscribe request. New chains are added as table rows.

use std::fmt;

use crate::error::ConfigError;

/// Protocol parameters for subscribing to one chain's pool channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainEntry {
    /// User-facing chain name (e.g. `ethereum`).
    pub name: &'static str,
    /// Chain code used by the feed (e.g. `ether`).
    pub feed_chain_code: &'static str,
    /// Channel carrying pool events for the chain (e.g. `uni:pools`).
    pub channel_name: &'static str,
}

impl fmt::Display for ChainEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.feed_chain_code, self.channel_name)
    }
}

const fn entry(
    name: &'static str,
    feed_chain_code: &'static str,
    channel_name: &'static str,
) -> ChainEntry {
    ChainEntry {
        name,
        feed_chain_code,
        channel_name,
    }
}

const CHAINS: &[ChainEntry] = &[
    entry("ethereum", "ether", "uni:pools"),
    entry("bnb", "bsc", "bsc:pools"),
    entry("arbitrum", "arbitrum", "arbitrum:pools"),
    entry("polygon", "polygon", "polygon:pools"),
    entry("aptos", "aptos", "aptos:pools"),
    entry("solana", "solana", "solana:pools"),
];

/// Chain selected when none is given.
pub const DEFAULT_CHAIN: &str = "ethereum";

/// Look up a chain by its user-facing name.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownChain`] when `name` is not in the registry.
pub fn resolve(name: &str) -> Result<ChainEntry, ConfigError> {
    CHAINS
        .iter()
        .find(|chain| chain.name == name)
        .copied()
        .ok_or_else(|| ConfigError::UnknownChain {
            name: name.to_string(),
            supported: names().collect::<Vec<_>>().join(", "),
        })
}

/// Names of all supported chains, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CHAINS.iter().map(|chain| chain.name)
}

/// All registry entries, in registry order.
#[must_use]
pub fn entries() -> &'static [ChainEntry] {
    CHAINS
}
