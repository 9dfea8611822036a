use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dexfeed::error::Error;
use dexfeed::port::outbound::transport::{FeedTransport, TransportEvent};

/// Shared, ordered log of what the transport and sinks observed.
pub type Timeline = Arc<Mutex<Vec<String>>>;

/// Deterministic test double for the feed transport.
#[derive(Default)]
pub struct ScriptedTransport {
    connect_error: Option<String>,
    send_error: Option<String>,
    events: VecDeque<TransportEvent>,
    timeline: Timeline,
}

impl ScriptedTransport {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            ..Self::default()
        }
    }

    pub fn fail_connect(mut self, error: &str) -> Self {
        self.connect_error = Some(error.to_string());
        self
    }

    pub fn fail_send(mut self, error: &str) -> Self {
        self.send_error = Some(error.to_string());
        self
    }

    pub fn push_text(mut self, text: impl Into<String>) -> Self {
        self.events.push_back(TransportEvent::Text(text.into()));
        self
    }

    pub fn push_close(mut self, code: u16, reason: &str) -> Self {
        self.events.push_back(TransportEvent::Closed {
            code: Some(code),
            reason: reason.to_string(),
        });
        self
    }

    pub fn push_error(mut self, error: &str) -> Self {
        self.events
            .push_back(TransportEvent::Error(error.to_string()));
        self
    }

    fn record(&self, entry: String) {
        self.timeline.lock().expect("lock timeline").push(entry);
    }
}

#[async_trait]
impl FeedTransport for ScriptedTransport {
    async fn connect(&mut self) -> Result<(), Error> {
        self.record("connect".into());
        match self.connect_error.take() {
            Some(e) => Err(Error::Connection(e)),
            None => Ok(()),
        }
    }

    async fn send_text(&mut self, text: &str) -> Result<(), Error> {
        if let Some(e) = self.send_error.take() {
            return Err(Error::Connection(e));
        }
        self.record(format!("send {text}"));
        Ok(())
    }

    async fn next_event(&mut self) -> Option<TransportEvent> {
        let event = self.events.pop_front();
        if event.is_some() {
            self.record("next".into());
        }
        event
    }

    fn endpoint(&self) -> &str {
        "scripted://feed"
    }
}
