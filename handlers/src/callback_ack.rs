//! Acknowledges button presses and screens out tokens nobody handles.

use std::sync::Arc;

use async_trait::async_trait;
use pdfbot_core::{Bot, BotError, Handler, HandlerResponse, Result, TokenError, Update};
use tracing::{debug, warn};

/// Runs first in the chain. `before` answers the callback query so the client's spinner stops
/// before any reply is sent; a failed answer is logged and handling goes on.
///
/// `handle` ends the chain for tokens with no known prefix (silently) and fails it for tokens
/// whose prefix is known but whose payload is unusable.
pub struct CallbackAckHandler {
    bot: Arc<dyn Bot>,
}

impl CallbackAckHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CallbackAckHandler {
    async fn before(&self, update: &Update) -> Result<bool> {
        if let Some(query_id) = update.callback_query_id() {
            if let Err(e) = self.bot.answer_callback(query_id).await {
                warn!(error = %e, user_id = update.user.id, "Failed to acknowledge callback");
            }
        }
        Ok(true)
    }

    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        match update.callback_token() {
            Some(Err(TokenError::Unrecognized(data))) => {
                debug!(data = %data, user_id = update.user.id, "Ignoring unknown callback token");
                Ok(HandlerResponse::Stop)
            }
            Some(Err(e)) => Err(BotError::MalformedToken(e)),
            _ => Ok(HandlerResponse::Ignore),
        }
    }
}
