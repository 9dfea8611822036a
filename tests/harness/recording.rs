use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dexfeed::domain::coin::CoinInfo;
use dexfeed::error::SinkError;
use dexfeed::port::outbound::reporter::{Fault, FaultReporter};
use dexfeed::port::outbound::sink::Sink;

use super::scripted_transport::Timeline;

/// Thread-safe record collector for sink assertions in tests.
#[derive(Clone)]
pub struct RecordingSink {
    name: &'static str,
    fail: bool,
    records: Arc<Mutex<Vec<CoinInfo>>>,
    timeline: Timeline,
}

impl RecordingSink {
    pub fn new(name: &'static str, timeline: Timeline) -> Self {
        Self {
            name,
            fail: false,
            records: Arc::default(),
            timeline,
        }
    }

    pub fn failing(name: &'static str, timeline: Timeline) -> Self {
        Self {
            fail: true,
            ..Self::new(name, timeline)
        }
    }

    pub fn records(&self) -> Vec<CoinInfo> {
        self.records.lock().expect("lock sink records").clone()
    }
}

#[async_trait]
impl Sink for RecordingSink {
    fn name(&self) -> &str {
        self.name
    }

    async fn deliver(&self, coin: &CoinInfo) -> Result<(), SinkError> {
        self.timeline
            .lock()
            .expect("lock timeline")
            .push(format!("sink {} {}", self.name, coin.address));
        if self.fail {
            return Err(SinkError::Other(format!("{} is down", self.name)));
        }
        self.records
            .lock()
            .expect("lock sink records")
            .push(coin.clone());
        Ok(())
    }
}

/// Thread-safe fault collector.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    faults: Arc<Mutex<Vec<Fault>>>,
}

impl RecordingReporter {
    pub fn faults(&self) -> Vec<Fault> {
        self.faults.lock().expect("lock faults").clone()
    }
}

impl FaultReporter for RecordingReporter {
    fn report(&self, fault: Fault) {
        self.faults.lock().expect("lock faults").push(fault);
    }
}
