//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
    /// Append log output to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let Some(path) = &self.file else {
            match self.format.as_str() {
                "json" => fmt().json().with_env_filter(filter).init(),
                _ => fmt().with_env_filter(filter).init(),
            }
            return Ok(());
        };

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = Mutex::new(file);
        match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init(),
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: None,
        }
    }
}
