//! Transport port for the streaming feed connection.
//!
//! The listener drives any implementation of [`FeedTransport`]; the
//! production adapter speaks WebSocket, tests use a scripted double.

use async_trait::async_trait;

use crate::error::Error;

/// Something the transport observed while waiting for the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A text frame arrived.
    Text(String),
    /// The connection was closed by either side.
    Closed {
        /// Close code, when the peer sent one.
        code: Option<u16>,
        /// Close reason, empty when none was given.
        reason: String,
    },
    /// A connection-level fault. Terminal for the connection.
    Error(String),
}

/// Bidirectional text transport to the feed endpoint.
#[async_trait]
pub trait FeedTransport: Send {
    /// Establish the connection.
    async fn connect(&mut self) -> Result<(), Error>;

    /// Send one text frame.
    async fn send_text(&mut self, text: &str) -> Result<(), Error>;

    /// Wait for the next event.
    ///
    /// Returns `None` once the underlying stream has ended.
    async fn next_event(&mut self) -> Option<TransportEvent>;

    /// Endpoint description for logging.
    fn endpoint(&self) -> &str;
}
