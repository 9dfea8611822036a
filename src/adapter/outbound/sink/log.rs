//! Sink that logs records via tracing.

use async_trait::async_trait;
use tracing::info;

use crate::domain::coin::CoinInfo;
use crate::error::SinkError;
use crate::port::outbound::sink::Sink;

/// Logs every record as a structured `tracing` event.
///
/// Installed when no other sink is enabled, so a bare run still shows
/// what the feed is producing.
pub struct LogSink;

#[async_trait]
impl Sink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    async fn deliver(&self, coin: &CoinInfo) -> Result<(), SinkError> {
        info!(
            chain = %coin.chain,
            address = %coin.address,
            pair = %coin.pair_label(),
            owner = coin.owner.as_deref().unwrap_or_default(),
            created_at = coin.created_at.as_deref().unwrap_or_default(),
            "New pool"
        );
        Ok(())
    }
}
