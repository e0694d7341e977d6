//! Transport config: token, optional API URL, webhook endpoint and port.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), WEBHOOK_URL, PORT.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use tracing::error;

/// Listening port when PORT is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Push delivery settings. Telegram posts updates to `<public_url>/<token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub public_url: String,
    pub port: u16,
}

impl WebhookConfig {
    /// Full URL registered with Telegram; its path is also the local route.
    pub fn endpoint_url(&self, bot_token: &str) -> Result<reqwest::Url> {
        let raw = format!("{}/{}", self.public_url.trim_end_matches('/'), bot_token);
        reqwest::Url::parse(&raw).with_context(|| format!("Invalid WEBHOOK_URL: {}", self.public_url))
    }

    /// Listens on all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Telegram connectivity config. No webhook means long polling.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub webhook: Option<WebhookConfig>,
}

/// Reads PORT; unset → [`DEFAULT_PORT`], unparseable → error.
fn port_from_env() -> Result<u16> {
    match env::var("PORT") {
        Ok(s) => s
            .trim()
            .parse()
            .with_context(|| format!("PORT is not a valid port number: {}", s)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; one of them is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook = match env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty()) {
            Some(public_url) => Some(WebhookConfig {
                public_url,
                port: port_from_env()?,
            }),
            None => None,
        };
        Ok(Self {
            bot_token,
            telegram_api_url,
            webhook,
        })
    }

    /// Builds config with the given token; polling, default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook: None,
        }
    }

    /// Checks URLs so startup fails before connecting.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref webhook) = self.webhook {
            webhook.endpoint_url(&self.bot_token)?;
        }
        Ok(())
    }
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set (e.g. a mock server in tests).
pub fn build_teloxide_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}
