//! Telegram notification sink.
//!
//! Sends each record as a plain-text message of `key: value` lines.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::debug;

use crate::domain::coin::CoinInfo;
use crate::error::{ConfigError, SinkError};
use crate::port::outbound::sink::Sink;

/// Credentials and target for the Telegram sink.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat: a numeric chat ID or a `@channel` username.
    pub chat_id: String,
}

impl TelegramConfig {
    /// Validate that both credentials are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an empty token or chat ID.
    pub fn new(bot_token: String, chat_id: String) -> Result<Self, ConfigError> {
        if bot_token.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "telegram.bot_token",
            });
        }
        if chat_id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "telegram.chat_id",
            });
        }
        Ok(Self { bot_token, chat_id })
    }

    /// Parse the chat ID into a Telegram recipient.
    #[must_use]
    pub fn recipient(&self) -> Recipient {
        let chat = self.chat_id.trim();
        match chat.parse::<i64>() {
            Ok(id) => Recipient::Id(ChatId(id)),
            Err(_) => Recipient::ChannelUsername(chat.to_string()),
        }
    }
}

/// Render the present fields of `coin` as `key: value` lines.
#[must_use]
pub fn format_coin_message(coin: &CoinInfo) -> String {
    coin.present_fields()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sink that posts each record to a Telegram chat.
pub struct TelegramSink {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramSink {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            recipient: config.recipient(),
        }
    }
}

#[async_trait]
impl Sink for TelegramSink {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn deliver(&self, coin: &CoinInfo) -> Result<(), SinkError> {
        let text = format_coin_message(coin);
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .map_err(|e| SinkError::Telegram(e.to_string()))?;

        debug!(address = %coin.address, "Sent Telegram message");
        Ok(())
    }
}
