//! Sink port for delivering pool records.
//!
//! A sink is any consumer of a [`CoinInfo`]: a file, a chat, a log line.
//! Sinks fail independently; the dispatcher isolates one from another.

use async_trait::async_trait;

use crate::domain::coin::CoinInfo;
use crate::error::SinkError;

/// Consumer of normalized pool records.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `deliver` is awaited before the next frame is read, so slow sinks
///   delay ingestion; configure a sink timeout if that matters
#[async_trait]
pub trait Sink: Send + Sync {
    /// Short name used when reporting failures.
    fn name(&self) -> &str;

    /// Deliver one record.
    async fn deliver(&self, coin: &CoinInfo) -> Result<(), SinkError>;
}

/// A sink that accepts and discards every record.
pub struct NullSink;

#[async_trait]
impl Sink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    async fn deliver(&self, _coin: &CoinInfo) -> Result<(), SinkError> {
        Ok(())
    }
}
