//! Wraps teloxide::Bot and implements [`pdfbot_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use pdfbot_core::{Bot as CoreBot, BotError, Chat, Menu, Result};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
};

/// Single-column inline keyboard, one row per menu button.
pub fn keyboard_from_menu(menu: &Menu) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(menu.buttons().iter().map(|button| {
        vec![InlineKeyboardButton::callback(
            button.label.clone(),
            button.token.encode(),
        )]
    }))
}

/// Thin wrapper around teloxide::Bot that implements pdfbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn transport_err(e: teloxide::RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_err)?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, text: &str, menu: &Menu) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard_from_menu(menu))
            .await
            .map_err(transport_err)?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, file_ref: &str) -> Result<()> {
        self.bot
            .send_document(ChatId(chat.id), InputFile::file_id(FileId(file_ref.to_string())))
            .await
            .map_err(transport_err)?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .await
            .map_err(transport_err)?;
        Ok(())
    }
}
