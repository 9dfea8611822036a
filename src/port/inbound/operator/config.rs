//! Configuration use-cases for operator-facing adapters.

use crate::error::Result;

/// Validation output for `config validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationReport {
    /// Resolved chain, rendered for display.
    pub chain: String,
    /// Feed endpoint.
    pub url: String,
    /// Sinks that would be installed, in delivery order.
    pub sinks: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Render the effective configuration with secrets masked.
    fn show_config(&self, config_toml: &str) -> Result<String>;

    /// Validate configuration content.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
