use std::sync::Arc;

use async_trait::async_trait;
use pdfbot_core::{Bot, Handler, HandlerResponse, Result, Update};
use tracing::{info, instrument};

use crate::menus::{main_menu, WELCOME_TEXT};

/// `/start`: shows the two-option main menu.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        if update.command() != Some("start") {
            return Ok(HandlerResponse::Ignore);
        }
        self.bot
            .send_menu(&update.chat, WELCOME_TEXT, &main_menu())
            .await?;
        info!(chat_id = update.chat.id, "step: main menu sent");
        Ok(HandlerResponse::Reply(WELCOME_TEXT.to_string()))
    }
}
