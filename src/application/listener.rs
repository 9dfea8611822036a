//! Connection lifecycle for the pool feed.
//!
//! [`FeedListener`] is a small state machine:
//!
//! ```text
//! Idle -> Connecting -> Open -> Receiving -> Closed
//!             |                     |
//!             +------> Errored <----+
//!                         |
//!                         v
//!                       Closed
//! ```
//!
//! The subscribe request is built once at construction by the
//! [`FeedProtocol`] and sent once, right after the transport opens. Frames
//! are decoded, filtered and dispatched inline, in arrival order. There is
//! no reconnection: once `Closed` is reached the run is over and a
//! supervisor decides what happens next.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dispatch::Dispatcher;
use crate::domain::chain::ChainEntry;
use crate::error::Result;
use crate::port::outbound::protocol::FeedProtocol;
use crate::port::outbound::reporter::{Fault, FaultReporter};
use crate::port::outbound::transport::{FeedTransport, TransportEvent};

/// Lifecycle state of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Open,
    Receiving,
    Errored,
    Closed,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The transport closed.
    Closed { code: Option<u16>, reason: String },
    /// The transport failed (including a failed connect).
    Errored { error: String },
}

/// Per-connection counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerStats {
    /// Text frames received.
    pub frames: u64,
    /// Frames dropped because they were not valid JSON.
    pub decode_failures: u64,
    /// Frames that produced a pool record.
    pub matched: u64,
    /// Successful sink deliveries, summed over sinks.
    pub delivered: u64,
}

/// Result of [`FeedListener::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub stats: ListenerStats,
}

/// Streams one chain's pool feed from a transport into a dispatcher.
pub struct FeedListener<T: FeedTransport> {
    transport: T,
    protocol: Arc<dyn FeedProtocol>,
    chain: ChainEntry,
    subscribe: String,
    dispatcher: Dispatcher,
    reporter: Arc<dyn FaultReporter>,
    state: ConnectionState,
    subscribed: bool,
    stats: ListenerStats,
}

impl<T: FeedTransport> FeedListener<T> {
    /// Build a listener and its subscribe request.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscribe request cannot be encoded.
    pub fn new(
        transport: T,
        protocol: Arc<dyn FeedProtocol>,
        chain: ChainEntry,
        dispatcher: Dispatcher,
        reporter: Arc<dyn FaultReporter>,
    ) -> Result<Self> {
        let subscribe = protocol.subscribe_request(&chain)?;
        Ok(Self {
            transport,
            protocol,
            chain,
            subscribe,
            dispatcher,
            reporter,
            state: ConnectionState::Idle,
            subscribed: false,
            stats: ListenerStats::default(),
        })
    }

    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    #[must_use]
    pub const fn stats(&self) -> ListenerStats {
        self.stats
    }

    #[must_use]
    pub const fn chain(&self) -> &ChainEntry {
        &self.chain
    }

    /// The subscribe request this listener sends on open.
    #[must_use]
    pub fn subscribe_message(&self) -> &str {
        &self.subscribe
    }

    fn transition(&mut self, next: ConnectionState) {
        debug!(from = ?self.state, to = ?next, "Listener state change");
        self.state = next;
    }

    /// Handle the transport reporting "open": send the subscription.
    ///
    /// The subscription is sent at most once per listener.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the subscribe request cannot be sent.
    pub async fn on_open(&mut self) -> Result<()> {
        self.transition(ConnectionState::Open);

        if !self.subscribed {
            info!(chain = %self.chain, "Subscribing to pool feed");
            self.transport.send_text(&self.subscribe).await?;
            self.subscribed = true;
        }

        self.reporter.report(Fault::Connected {
            endpoint: self.transport.endpoint().to_string(),
        });
        self.transition(ConnectionState::Receiving);
        Ok(())
    }

    /// Handle one inbound text frame.
    ///
    /// Malformed frames are reported and dropped; the connection stays up.
    pub async fn on_message(&mut self, raw: &str) {
        if self.state != ConnectionState::Receiving {
            warn!(state = ?self.state, "Dropping frame received outside Receiving");
            return;
        }

        self.stats.frames += 1;

        let coin = match self.protocol.parse_frame(raw, &self.chain) {
            Ok(Some(coin)) => coin,
            Ok(None) => return,
            Err(e) => {
                self.stats.decode_failures += 1;
                self.reporter.report(Fault::DecodeFailed {
                    raw: e.raw,
                    error: e.source.to_string(),
                });
                return;
            }
        };

        self.stats.matched += 1;
        debug!(address = %coin.address, "Pool created");
        let delivered = self.dispatcher.dispatch(&coin).await;
        self.stats.delivered += delivered as u64;
    }

    /// Handle a transport fault. Terminal for this connection.
    pub fn on_error(&mut self, error: String) -> RunOutcome {
        self.reporter.report(Fault::TransportFailed {
            error: error.clone(),
        });
        self.transition(ConnectionState::Errored);
        self.transition(ConnectionState::Closed);
        RunOutcome::Errored { error }
    }

    /// Handle the transport closing.
    pub fn on_close(&mut self, code: Option<u16>, reason: String) -> RunOutcome {
        self.reporter.report(Fault::Disconnected {
            code,
            reason: reason.clone(),
        });
        self.transition(ConnectionState::Closed);
        RunOutcome::Closed { code, reason }
    }

    /// Connect, subscribe and process frames until the connection ends.
    pub async fn run(mut self) -> RunReport {
        let outcome = self.drive().await;
        let stats = self.stats;

        info!(
            frames = stats.frames,
            decode_failures = stats.decode_failures,
            matched = stats.matched,
            delivered = stats.delivered,
            "Listener stopped"
        );

        RunReport { outcome, stats }
    }

    async fn drive(&mut self) -> RunOutcome {
        if self.state != ConnectionState::Idle {
            return RunOutcome::Errored {
                error: format!("listener cannot start from {:?}", self.state),
            };
        }

        self.transition(ConnectionState::Connecting);
        if let Err(e) = self.transport.connect().await {
            return self.on_error(e.to_string());
        }

        if let Err(e) = self.on_open().await {
            return self.on_error(e.to_string());
        }

        loop {
            match self.transport.next_event().await {
                Some(TransportEvent::Text(text)) => self.on_message(&text).await,
                Some(TransportEvent::Closed { code, reason }) => {
                    return self.on_close(code, reason);
                }
                Some(TransportEvent::Error(error)) => return self.on_error(error),
                None => return self.on_close(None, String::new()),
            }
        }
    }
}
