//! Outbound transport abstraction.
//!
//! [`Bot`] is transport-agnostic; pdfbot-telegram implements it via teloxide and tests substitute
//! a recording implementation.

use crate::error::Result;
use crate::menu::Menu;
use crate::types::Chat;
use async_trait::async_trait;

/// Everything the handlers may ask of the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends text with a single-column inline keyboard built from `menu`.
    async fn send_menu(&self, chat: &Chat, text: &str, menu: &Menu) -> Result<()>;
    /// Sends a stored file by its transport-native reference; nothing is uploaded.
    async fn send_document(&self, chat: &Chat, file_ref: &str) -> Result<()>;
    /// Acknowledges a button press so the client stops showing a loading indicator.
    async fn answer_callback(&self, query_id: &str) -> Result<()>;
}
