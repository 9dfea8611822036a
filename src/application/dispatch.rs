//! Ordered, fault-isolated delivery of records to sinks.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::coin::CoinInfo;
use crate::error::SinkError;
use crate::port::outbound::reporter::{Fault, FaultReporter};
use crate::port::outbound::sink::Sink;

/// Registry of sinks (composite pattern).
///
/// Sinks run one after another in registration order. A failing or timed
/// out sink is reported and skipped; later sinks still run.
pub struct Dispatcher {
    sinks: Vec<Box<dyn Sink>>,
    reporter: Arc<dyn FaultReporter>,
    sink_timeout: Option<Duration>,
}

impl Dispatcher {
    /// Create an empty dispatcher reporting through `reporter`.
    #[must_use]
    pub fn new(reporter: Arc<dyn FaultReporter>) -> Self {
        Self {
            sinks: Vec::new(),
            reporter,
            sink_timeout: None,
        }
    }

    /// Bound each sink call to `limit`.
    #[must_use]
    pub fn with_sink_timeout(mut self, limit: Duration) -> Self {
        self.sink_timeout = Some(limit);
        self
    }

    /// Register a sink after those already registered.
    pub fn register(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Names of registered sinks, in order.
    #[must_use]
    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Deliver `coin` to every sink.
    ///
    /// Returns the number of sinks that accepted the record.
    pub async fn dispatch(&self, coin: &CoinInfo) -> usize {
        let mut delivered = 0;

        for sink in &self.sinks {
            let outcome = match self.sink_timeout {
                Some(limit) => match timeout(limit, sink.deliver(coin)).await {
                    Ok(result) => result,
                    Err(_) => Err(SinkError::Timeout(limit)),
                },
                None => sink.deliver(coin).await,
            };

            match outcome {
                Ok(()) => delivered += 1,
                Err(e) => self.reporter.report(Fault::SinkFailed {
                    sink: sink.name().to_string(),
                    error: e.to_string(),
                }),
            }
        }

        delivered
    }
}
