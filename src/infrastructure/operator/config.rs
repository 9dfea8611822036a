//! Configuration operator implementation.

use std::sync::Arc;

use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap::build_dispatcher;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::config::{ConfigValidationReport, ConfigurationOperator};
use crate::port::outbound::reporter::NullReporter;

use super::entry::Operator;

const MASK: &str = "********";

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<String> {
        let config = Config::parse_toml(config_toml)?;
        render(&config)
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let dispatcher = build_dispatcher(&config, Arc::new(NullReporter))?;

        Ok(ConfigValidationReport {
            chain: config.chain()?.to_string(),
            url: config.feed.url.clone(),
            sinks: dispatcher
                .sink_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
    }
}

/// Render the configuration as TOML with secrets masked.
fn render(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    if shown.telegram.bot_token.is_some() {
        shown.telegram.bot_token = Some(MASK.to_string());
    }
    toml::to_string_pretty(&shown).map_err(|e| {
        ConfigError::InvalidValue {
            field: "config",
            reason: e.to_string(),
        }
        .into()
    })
}
