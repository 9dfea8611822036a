//! Runtime control types for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

/// Configuration content plus command-line overrides for one run.
///
/// Overrides take precedence over both the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content; empty means defaults.
    pub config_toml: String,

    /// Override for the chain name.
    pub chain: Option<String>,

    /// Append log output to this file.
    pub log_file: Option<String>,

    /// Override for the feed WebSocket URL.
    pub url: Option<String>,

    /// Override for the log level.
    pub log_level: Option<String>,

    /// Enable the CSV sink, writing to this file.
    pub csv_path: Option<String>,
}

/// Runtime use-cases for operator-facing adapters.
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Listen to the feed until it ends or the process is interrupted.
    ///
    /// Configuration errors are returned before any connection attempt.
    async fn execute_run(&self, request: RunRequest) -> Result<()>;
}
