//! Logging handler: records each inbound update and the chain's outcome.

use async_trait::async_trait;
use pdfbot_core::{Handler, HandlerResponse, Result, Update, UpdateKind};
use tracing::{debug, info, instrument};

/// Logs each update in before() and the response in after(); always continues.
pub struct LoggingHandler;

fn content_of(update: &Update) -> &str {
    match &update.kind {
        UpdateKind::Command { name, .. } => name,
        UpdateKind::Callback { data, .. } => data,
        UpdateKind::Text(text) => text,
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<bool> {
        info!(
            user_id = update.user.id,
            chat_id = update.chat.id,
            username = %update.user.username.as_deref().unwrap_or("unknown"),
            kind = update.kind_name(),
            content = %content_of(update),
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, update, response))]
    async fn after(&self, update: &Update, response: &HandlerResponse) -> Result<()> {
        debug!(update_id = %update.id, response = ?response, "Processed update");
        Ok(())
    }
}
