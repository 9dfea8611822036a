//! Fault reporter port.
//!
//! The ingestion core never configures logging itself; it reports notable
//! events through an injected [`FaultReporter`].

use tracing::{error, info};

/// Notable events raised by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Transport connected and the subscription was sent.
    Connected {
        /// Endpoint that was connected to.
        endpoint: String,
    },
    /// Transport closed.
    Disconnected {
        /// Close code, if any.
        code: Option<u16>,
        /// Close reason, possibly empty.
        reason: String,
    },
    /// An inbound message was not valid JSON and was dropped.
    DecodeFailed {
        /// Raw message text.
        raw: String,
        /// Parser error.
        error: String,
    },
    /// A sink failed while handling a record.
    SinkFailed {
        /// Name of the failing sink.
        sink: String,
        /// Error detail.
        error: String,
    },
    /// Connection-level fault; the connection is over.
    TransportFailed {
        /// Error detail.
        error: String,
    },
}

impl Fault {
    /// True for faults reported at error severity.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::DecodeFailed { .. } | Self::SinkFailed { .. } | Self::TransportFailed { .. }
        )
    }
}

/// Receiver of pipeline faults.
pub trait FaultReporter: Send + Sync {
    /// Handle a fault. Must not block.
    fn report(&self, fault: Fault);
}

/// A reporter that discards everything.
pub struct NullReporter;

impl FaultReporter for NullReporter {
    fn report(&self, _fault: Fault) {}
}

/// Reporter that emits `tracing` events.
pub struct TracingReporter;

impl FaultReporter for TracingReporter {
    fn report(&self, fault: Fault) {
        match fault {
            Fault::Connected { endpoint } => {
                info!(endpoint = %endpoint, "Connection opened");
            }
            Fault::Disconnected { code, reason } => {
                info!(code = ?code, reason = %reason, "Connection closed");
            }
            Fault::DecodeFailed { raw, error } => {
                error!(error = %error, raw = %raw, "Failed to decode message");
            }
            Fault::SinkFailed { sink, error } => {
                error!(sink = %sink, error = %error, "Sink failed");
            }
            Fault::TransportFailed { error } => {
                error!(error = %error, "Client error");
            }
        }
    }
}
