use std::sync::Arc;

use async_trait::async_trait;
use pdfbot_core::{Bot, CallbackToken, Handler, HandlerResponse, Result, Update};
use storage::DocumentStore;
use tracing::{info, instrument, warn};

use crate::menus::FILE_UNAVAILABLE;
use crate::store_error;

/// `file_<id>` button: re-sends the stored file by its Telegram file id.
///
/// A record that has disappeared produces no message unless `notify_missing` is set.
pub struct DeliveryHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn DocumentStore>,
    notify_missing: bool,
}

impl DeliveryHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn DocumentStore>, notify_missing: bool) -> Self {
        Self {
            bot,
            store,
            notify_missing,
        }
    }
}

#[async_trait]
impl Handler for DeliveryHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let Some(Ok(CallbackToken::Document(id))) = update.callback_token() else {
            return Ok(HandlerResponse::Ignore);
        };
        match self.store.get_by_id(&id).await.map_err(store_error)? {
            Some(record) => {
                self.bot.send_document(&update.chat, &record.file_ref).await?;
                info!(document_id = %id, file_name = %record.file_name, "step: document sent");
                Ok(HandlerResponse::Stop)
            }
            None if self.notify_missing => {
                warn!(document_id = %id, "Selected document not found");
                self.bot.send_message(&update.chat, FILE_UNAVAILABLE).await?;
                Ok(HandlerResponse::Reply(FILE_UNAVAILABLE.to_string()))
            }
            None => {
                warn!(document_id = %id, "Selected document not found");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
