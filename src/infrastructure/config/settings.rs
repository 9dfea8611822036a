//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the endpoint and the Telegram credentials.
//!
//! # Example
//!
//! ```no_run
//! use dexfeed::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::csv::CsvAppConfig;
use super::feed::FeedConfig;
use super::logging::LoggingConfig;
use super::telegram::TelegramAppConfig;
use crate::domain::chain::{self, ChainEntry};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `feed.url`.
pub const ENV_URL: &str = "DEXFEED_URL";
/// Environment variable overriding `telegram.bot_token`.
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable overriding `telegram.chat_id`.
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Feed endpoint and chain selection.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// CSV persistence sink.
    #[serde(default)]
    pub csv: CsvAppConfig,

    /// Telegram notification sink.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::from_toml_with_env(content, env)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content and apply environment overrides without validating.
    ///
    /// For callers that layer further overrides before a single
    /// [`Config::validate`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed.
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::from_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// [`Config::from_toml`] with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed.
    pub fn from_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(ENV_URL).filter(|v| !v.is_empty()) {
            self.feed.url = url;
        }
        if let Some(token) = env(ENV_TELEGRAM_BOT_TOKEN).filter(|v| !v.is_empty()) {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = env(ENV_TELEGRAM_CHAT_ID).filter(|v| !v.is_empty()) {
            self.telegram.chat_id = Some(chat_id);
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        self.chain()?;

        if self.feed.url.is_empty() {
            return Err(ConfigError::MissingField { field: "feed.url" }.into());
        }
        let url = Url::parse(&self.feed.url).map_err(|e| ConfigError::InvalidValue {
            field: "feed.url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "ws" | "wss") {
            return Err(ConfigError::InvalidValue {
                field: "feed.url",
                reason: format!("scheme must be ws or wss, got {}", url.scheme()),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }

        if self.csv.enabled && self.csv.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "csv.path" }.into());
        }

        if self.telegram.enabled {
            if is_blank(self.telegram.bot_token.as_deref()) {
                return Err(ConfigError::MissingField {
                    field: "telegram.bot_token",
                }
                .into());
            }
            if is_blank(self.telegram.chat_id.as_deref()) {
                return Err(ConfigError::MissingField {
                    field: "telegram.chat_id",
                }
                .into());
            }
        }

        Ok(())
    }

    /// Resolve the configured chain in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownChain`] for an unsupported chain name.
    pub fn chain(&self) -> Result<ChainEntry> {
        Ok(chain::resolve(&self.feed.chain)?)
    }

    /// Initialize logging based on configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn init_logging(&self) -> Result<()> {
        self.logging.init()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml_with_env("", no_env).unwrap();
        assert_eq!(config.feed.url, "wss://ws.dextools.io/");
        assert_eq!(config.feed.chain, "ethereum");
        assert_eq!(config.feed.sink_timeout_secs, 10);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(!config.csv.enabled);
        assert!(!config.telegram.enabled);
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
[feed]
url = "wss://example.com/feed"
chain = "solana"
sink_timeout_secs = 3

[logging]
level = "debug"
format = "json"
file = "dexfeed.log"

[csv]
enabled = true
path = "pools.csv"

[telegram]
enabled = true
bot_token = "123:abc"
chat_id = "-100"
"#;
        let config = Config::parse_toml_with_env(toml, no_env).unwrap();
        assert_eq!(config.chain().unwrap().feed_chain_code, "solana");
        assert_eq!(config.feed.sink_timeout_secs, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.csv.path.to_str(), Some("pools.csv"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("-100"));
    }

    #[test]
    fn rejects_unknown_chain() {
        let err = Config::parse_toml_with_env("[feed]\nchain = \"dogechain\"\n", no_env)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::UnknownChain { ref name, .. }) if name == "dogechain"
        ));
    }

    #[test]
    fn rejects_non_websocket_url() {
        let err = Config::parse_toml_with_env("[feed]\nurl = \"https://ws.dextools.io/\"\n", no_env)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "feed.url",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err =
            Config::parse_toml_with_env("[feed]\nurl = \"not a url\"\n", no_env).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "feed.url",
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = Config::parse_toml_with_env("[logging]\nformat = \"xml\"\n", no_env)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            })
        ));
    }

    #[test]
    fn telegram_requires_credentials_when_enabled() {
        let err = Config::parse_toml_with_env("[telegram]\nenabled = true\n", no_env)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "telegram.bot_token"
            })
        ));
    }

    #[test]
    fn env_supplies_telegram_credentials() {
        let env = |key: &str| match key {
            ENV_TELEGRAM_BOT_TOKEN => Some("123:abc".to_string()),
            ENV_TELEGRAM_CHAT_ID => Some("42".to_string()),
            _ => None,
        };
        let config = Config::parse_toml_with_env("[telegram]\nenabled = true\n", env).unwrap();
        assert_eq!(config.telegram.bot_token.as_deref(), Some("123:abc"));
        assert_eq!(config.telegram.chat_id.as_deref(), Some("42"));
    }

    #[test]
    fn env_overrides_url() {
        let env = |key: &str| (key == ENV_URL).then(|| "ws://localhost:9000/".to_string());
        let config = Config::parse_toml_with_env("[feed]\nurl = \"wss://a/\"\n", env).unwrap();
        assert_eq!(config.feed.url, "ws://localhost:9000/");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml_with_env("[feed\nchain=", no_env).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn unvalidated_parse_defers_errors_to_validate() {
        let config = Config::from_toml_with_env(
            "[feed]\nchain = \"dogechain\"\nurl = \"http://a/\"\n",
            no_env,
        )
        .unwrap();
        assert_eq!(config.feed.chain, "dogechain");
        assert!(config.validate().is_err());
    }
}
