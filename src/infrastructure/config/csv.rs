//! CSV sink configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CSV sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CsvAppConfig {
    /// Enable the CSV sink.
    #[serde(default)]
    pub enabled: bool,
    /// File to append rows to (default: `coins.csv`).
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf {
    PathBuf::from("coins.csv")
}

impl Default for CsvAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_path(),
        }
    }
}
