//! BotConfig: BaseConfig + StoreConfig + handler knobs. Use load() for env-based loading.

use anyhow::{Context, Result};
use handlers::{HandlerConfig, DEFAULT_MENU_MAX_BUTTONS, DEFAULT_SESSION_TTL};
use pdfbot_telegram::TelegramConfig;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::{BaseConfig, StoreConfig};

/// Parses an env var; unset means `default`, unparseable is an error.
fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(s) => s
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{} has an invalid value: {}", name, s)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => anyhow::bail!("{} must be true or false, got {}", name, s),
        },
        Err(_) => Ok(false),
    }
}

/// MENU_MAX_BUTTONS, NOTIFY_MISSING_DOCUMENT, SEARCH_SESSION_TTL_SECS (0 = never expire).
fn handler_config_from_env() -> Result<HandlerConfig> {
    let ttl_secs = parse_env("SEARCH_SESSION_TTL_SECS", DEFAULT_SESSION_TTL.as_secs())?;
    Ok(HandlerConfig {
        menu_max_buttons: parse_env("MENU_MAX_BUTTONS", DEFAULT_MENU_MAX_BUTTONS)?,
        notify_missing_document: parse_flag("NOTIFY_MISSING_DOCUMENT")?,
        session_ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
    })
}

/// Full bot config. Call validate() after load() to fail fast before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub store: StoreConfig,
    pub handlers: HandlerConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            base: BaseConfig::load(token)?,
            store: StoreConfig::from_env()?,
            handlers: handler_config_from_env()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.store.validate()
    }

    pub fn telegram(&self) -> &TelegramConfig {
        &self.base.telegram
    }
    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
}
