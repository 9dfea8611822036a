//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::adapter::outbound::dextools::protocol::DextoolsProtocol;
use crate::adapter::outbound::dextools::stream::DextoolsStream;
use crate::adapter::outbound::sink::csv::CsvSink;
use crate::adapter::outbound::sink::log::LogSink;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::sink::telegram::{TelegramConfig, TelegramSink};
use crate::application::dispatch::Dispatcher;
use crate::application::listener::FeedListener;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::reporter::FaultReporter;

/// Build the dispatcher from configuration.
///
/// Sinks are registered CSV first, then Telegram. When neither is enabled
/// the log sink is installed so records are still visible.
///
/// # Errors
///
/// Returns an error if an enabled sink is misconfigured.
pub fn build_dispatcher(config: &Config, reporter: Arc<dyn FaultReporter>) -> Result<Dispatcher> {
    let mut dispatcher = Dispatcher::new(reporter);
    if config.feed.sink_timeout_secs > 0 {
        dispatcher =
            dispatcher.with_sink_timeout(Duration::from_secs(config.feed.sink_timeout_secs));
    }

    if config.csv.enabled {
        info!(path = %config.csv.path.display(), "CSV sink enabled");
        dispatcher.register(Box::new(CsvSink::new(&config.csv.path)));
    }

    register_telegram(&mut dispatcher, config)?;

    if dispatcher.is_empty() {
        info!("No sinks enabled, logging pools only");
        dispatcher.register(Box::new(LogSink));
    }

    Ok(dispatcher)
}

#[cfg(feature = "telegram")]
fn register_telegram(dispatcher: &mut Dispatcher, config: &Config) -> Result<()> {
    if !config.telegram.enabled {
        return Ok(());
    }

    let tg_config = TelegramConfig::new(
        config.telegram.bot_token.clone().unwrap_or_default(),
        config.telegram.chat_id.clone().unwrap_or_default(),
    )?;
    info!(chat_id = %tg_config.chat_id, "Telegram sink enabled");
    dispatcher.register(Box::new(TelegramSink::new(&tg_config)));
    Ok(())
}

#[cfg(not(feature = "telegram"))]
fn register_telegram(_dispatcher: &mut Dispatcher, config: &Config) -> Result<()> {
    if config.telegram.enabled {
        tracing::warn!("Telegram enabled but the telegram feature is not compiled in");
    }
    Ok(())
}

/// Build a listener for the configured chain over the WebSocket transport.
///
/// # Errors
///
/// Returns an error if the chain is unknown or a sink is misconfigured.
pub fn build_listener(
    config: &Config,
    reporter: Arc<dyn FaultReporter>,
) -> Result<FeedListener<DextoolsStream>> {
    let chain = config.chain()?;
    let dispatcher = build_dispatcher(config, Arc::clone(&reporter))?;
    info!(chain = %chain, sinks = ?dispatcher.sink_names(), "Listener configured");
    FeedListener::new(
        DextoolsStream::new(config.feed.url.clone()),
        Arc::new(DextoolsProtocol),
        chain,
        dispatcher,
        reporter,
    )
}
