//! DEXTools WebSocket transport.
//!
//! Owns the socket for one connection. Pings are answered inline; binary and
//! pong frames are ignored. Everything else is surfaced to the listener as a
//! [`TransportEvent`].

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::port::outbound::transport::{FeedTransport, TransportEvent};

/// Default public endpoint of the feed.
pub const DEFAULT_WS_URL: &str = "wss://ws.dextools.io/";

/// WebSocket transport implementing [`FeedTransport`].
pub struct DextoolsStream {
    url: String,
    ws: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl DextoolsStream {
    /// Create a disconnected transport for the given WebSocket URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ws: None,
        }
    }

    /// True once `connect` has succeeded and the socket has not ended.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.ws.is_some()
    }
}

#[async_trait]
impl FeedTransport for DextoolsStream {
    async fn connect(&mut self) -> Result<()> {
        info!(url = %self.url, "Connecting to WebSocket");
        let (ws_stream, response) = connect_async(&self.url).await?;
        info!(status = %response.status(), "WebSocket connected");
        self.ws = Some(ws_stream);
        Ok(())
    }

    async fn send_text(&mut self, text: &str) -> Result<()> {
        let ws = self
            .ws
            .as_mut()
            .ok_or_else(|| Error::Connection("Not connected".into()))?;
        ws.send(Message::Text(text.to_string())).await?;
        Ok(())
    }

    async fn next_event(&mut self) -> Option<TransportEvent> {
        let ws = self.ws.as_mut()?;

        loop {
            let Some(frame) = ws.next().await else {
                self.ws = None;
                return None;
            };

            match frame {
                Ok(Message::Text(text)) => {
                    trace!(bytes = text.len(), "Received WebSocket text frame");
                    return Some(TransportEvent::Text(text));
                }
                Ok(Message::Ping(data)) => {
                    trace!("Received WebSocket ping");
                    if let Err(e) = ws.send(Message::Pong(data)).await {
                        self.ws = None;
                        return Some(TransportEvent::Error(format!("failed to send pong: {e}")));
                    }
                }
                Ok(Message::Close(frame)) => {
                    self.ws = None;
                    return Some(match frame {
                        Some(frame) => TransportEvent::Closed {
                            code: Some(u16::from(frame.code)),
                            reason: frame.reason.to_string(),
                        },
                        None => TransportEvent::Closed {
                            code: None,
                            reason: String::new(),
                        },
                    });
                }
                Ok(_) => continue,
                Err(e) => {
                    self.ws = None;
                    return Some(TransportEvent::Error(e.to_string()));
                }
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stream_is_disconnected() {
        let stream = DextoolsStream::new(DEFAULT_WS_URL);
        assert!(!stream.is_connected());
        assert_eq!(stream.endpoint(), "wss://ws.dextools.io/");
    }

    #[tokio::test]
    async fn send_before_connect_fails() {
        let mut stream = DextoolsStream::new("wss://example.invalid/");
        let err = stream.send_text("{}").await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[tokio::test]
    async fn next_event_before_connect_is_none() {
        let mut stream = DextoolsStream::new("wss://example.invalid/");
        assert!(stream.next_event().await.is_none());
    }
}
