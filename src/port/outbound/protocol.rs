//! Wire protocol port for the pool feed.
//!
//! The listener knows when to subscribe and when a frame arrives; the
//! protocol knows what the subscription looks like and what a frame means.

use crate::domain::chain::ChainEntry;
use crate::domain::coin::CoinInfo;
use crate::error::{DecodeError, Result};

/// Feed-specific encoding of the subscription and of inbound frames.
pub trait FeedProtocol: Send + Sync {
    /// Subscribe request for `chain`, sent once per connection.
    fn subscribe_request(&self, chain: &ChainEntry) -> Result<String>;

    /// Interpret one text frame.
    ///
    /// `Ok(None)` means the frame is well formed but reports no new pool.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the frame is not valid JSON.
    fn parse_frame(
        &self,
        raw: &str,
        chain: &ChainEntry,
    ) -> std::result::Result<Option<CoinInfo>, DecodeError>;
}
