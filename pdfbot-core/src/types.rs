//! Core types: user, chat, inbound update, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::callback::{CallbackToken, TokenError};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Identity scope under which conversation state is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub chat_id: i64,
    pub user_id: i64,
}

/// Shape of an inbound update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateKind {
    /// Slash command addressed to this bot; `name` has no leading `/` and no `@botname`.
    Command { name: String, args: Vec<String> },
    /// Inline button press. `query_id` is needed to acknowledge it.
    Callback { query_id: String, data: String },
    /// Plain text that is not a command.
    Text(String),
}

/// One inbound event from the chat transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: UpdateKind,
    pub received_at: DateTime<Utc>,
}

impl Update {
    pub fn session_key(&self) -> SessionKey {
        SessionKey {
            chat_id: self.chat.id,
            user_id: self.user.id,
        }
    }

    /// Command name if this is a command update.
    pub fn command(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::Command { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Message text if this is a free-text update.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Callback query id if this is a button press.
    pub fn callback_query_id(&self) -> Option<&str> {
        match &self.kind {
            UpdateKind::Callback { query_id, .. } => Some(query_id.as_str()),
            _ => None,
        }
    }

    /// Decodes the button token. `None` for non-callback updates.
    pub fn callback_token(&self) -> Option<std::result::Result<CallbackToken, TokenError>> {
        match &self.kind {
            UpdateKind::Callback { data, .. } => Some(CallbackToken::parse(data)),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            UpdateKind::Command { .. } => "command",
            UpdateKind::Callback { .. } => "callback",
            UpdateKind::Text(_) => "text",
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries what was sent so later handlers can log it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing to report.
    Stop,
    /// Not this handler's update, try next.
    Ignore,
    /// Stop the chain; carries the text sent to the user.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`Update`]. `None` when the update has no
/// shape the bot reacts to (stickers, photos, commands for another bot).
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Option<Update>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _update: &Update) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the update. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _update: &Update) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(&self, _update: &Update, _response: &HandlerResponse) -> crate::error::Result<()> {
        Ok(())
    }
}
