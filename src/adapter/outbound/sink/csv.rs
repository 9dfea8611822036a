//! Append-only CSV persistence sink.
//!
//! Every field is quoted. The header row is written only when the file is
//! empty, so restarts keep appending to the same table.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::coin::{CoinInfo, FIELD_NAMES};
use crate::error::SinkError;
use crate::port::outbound::sink::Sink;

const LINE_END: &str = "\r\n";

/// Sink that appends one row per record to a CSV file.
pub struct CsvSink {
    path: PathBuf,
    // Serializes open/check/append so the header is written at most once.
    lock: Mutex<()>,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Quote a single field, doubling embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Header row for the fixed field order.
#[must_use]
pub fn header_row() -> String {
    let cells: Vec<_> = FIELD_NAMES.iter().map(|name| quote(name)).collect();
    format!("{}{LINE_END}", cells.join(","))
}

/// Data row for `coin`; absent fields become empty quoted cells.
#[must_use]
pub fn data_row(coin: &CoinInfo) -> String {
    let cells: Vec<_> = coin
        .fields()
        .iter()
        .map(|(_, value)| quote(value.as_deref().unwrap_or_default()))
        .collect();
    format!("{}{LINE_END}", cells.join(","))
}

#[async_trait]
impl Sink for CsvSink {
    fn name(&self) -> &str {
        "csv"
    }

    async fn deliver(&self, coin: &CoinInfo) -> Result<(), SinkError> {
        let _guard = self.lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut out = String::new();
        if file.metadata().await?.len() == 0 {
            out.push_str(&header_row());
        }
        out.push_str(&data_row(coin));

        file.write_all(out.as_bytes()).await?;
        file.flush().await?;

        debug!(path = %self.path.display(), address = %coin.address, "Appended CSV row");
        Ok(())
    }
}
