//! Base config: Telegram connection (token, API URL, webhook, port) and logging. Loaded from env.

use anyhow::Result;
use pdfbot_telegram::TelegramConfig;
use std::env;

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, TELEGRAM_API_URL / TELOXIDE_API_URL, WEBHOOK_URL, PORT
    pub telegram: TelegramConfig,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/pdfbot.log".to_string());
        Ok(Self { telegram, log_file })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
