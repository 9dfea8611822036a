//! DEXTools implementation of the feed protocol port.

use super::dto::message::{decode, encode_subscribe};
use super::extract::extract;
use crate::domain::chain::ChainEntry;
use crate::domain::coin::CoinInfo;
use crate::error::{DecodeError, Result};
use crate::port::outbound::protocol::FeedProtocol;

/// JSON-RPC subscribe request plus `create`-event extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DextoolsProtocol;

impl FeedProtocol for DextoolsProtocol {
    fn subscribe_request(&self, chain: &ChainEntry) -> Result<String> {
        encode_subscribe(chain)
    }

    fn parse_frame(
        &self,
        raw: &str,
        chain: &ChainEntry,
    ) -> std::result::Result<Option<CoinInfo>, DecodeError> {
        let frame = decode(raw)?;
        Ok(extract(&frame, chain.name))
    }
}
