//! # pdfbot-telegram
//!
//! Telegram transport layer: adapters from teloxide types to core [`pdfbot_core::Update`], the
//! [`pdfbot_core::Bot`] implementation, minimal config, and the dispatcher runner (webhook or long
//! polling). Handles only Telegram connectivity and handler-chain execution; no store or routing logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    classify_text, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{keyboard_from_menu, TelegramBotAdapter};
pub use config::{build_teloxide_bot, TelegramConfig, WebhookConfig, DEFAULT_PORT};
pub use runner::{run_dispatcher, BotUsername};
