//! Telegram notification configuration.

use serde::{Deserialize, Serialize};

/// Telegram sink configuration.
///
/// Credentials may be left out of the file and supplied through
/// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
    /// Bot API token obtained from BotFather.
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Numeric chat ID or `@channel` username.
    #[serde(default)]
    pub chat_id: Option<String>,
}
