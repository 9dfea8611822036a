//! DEXTools WebSocket message types.
//!
//! The feed speaks a JSON-RPC flavoured protocol. The client sends a single
//! subscribe request:
//! ```json
//! {"jsonrpc":"2.0","method":"subscribe","params":{"chain":"ether","channel":"uni:pools"}}
//! ```
//! Inbound messages are decoded into a generic [`serde_json::Value`] tree
//! because their shape is not guaranteed. The raw text travels with the tree
//! so numeric leaves can be read back digit for digit.

use serde::Serialize;
use serde_json::Value;

use crate::domain::chain::ChainEntry;
use crate::error::{DecodeError, Result};

/// Subscription request sent once per connection.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DextoolsSubscribeMessage {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: DextoolsSubscribeParams,
}

/// Parameters of [`DextoolsSubscribeMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DextoolsSubscribeParams {
    pub chain: String,
    pub channel: String,
}

impl DextoolsSubscribeMessage {
    #[must_use]
    pub fn new(entry: &ChainEntry) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "subscribe",
            params: DextoolsSubscribeParams {
                chain: entry.feed_chain_code.to_string(),
                channel: entry.channel_name.to_string(),
            },
        }
    }
}

/// Render the subscribe request for `entry`.
///
/// # Errors
///
/// Returns an error only if serialization fails, which cannot happen for
/// this fixed shape.
pub fn encode_subscribe(entry: &ChainEntry) -> Result<String> {
    Ok(serde_json::to_string(&DextoolsSubscribeMessage::new(entry))?)
}

/// One decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a> {
    /// Text exactly as received.
    pub raw: &'a str,
    /// Parsed JSON tree.
    pub tree: Value,
}

/// Parse one inbound text frame.
///
/// # Errors
///
/// Returns [`DecodeError`] when `raw` is not valid JSON.
pub fn decode(raw: &str) -> std::result::Result<Frame<'_>, DecodeError> {
    let tree = serde_json::from_str(raw).map_err(|source| DecodeError {
        raw: raw.to_string(),
        source,
    })?;
    Ok(Frame { raw, tree })
}
