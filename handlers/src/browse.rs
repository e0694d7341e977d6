//! Browse flow: collection list, then the documents of one collection.

use std::sync::Arc;

use async_trait::async_trait;
use pdfbot_core::{Bot, CallbackToken, Handler, HandlerResponse, Result, Update};
use storage::DocumentStore;
use tracing::{info, instrument};

use crate::menus::{
    collections_menu, documents_menu, prompt_for, NO_FILES, NO_SUBJECTS, SELECT_FILE,
    SELECT_SUBJECT,
};
use crate::store_error;

const BROWSE_COMMANDS: [&str; 2] = ["browse", "pdf_subjectwise"];

fn wants_browse(update: &Update) -> bool {
    match update.command() {
        Some(name) => BROWSE_COMMANDS.contains(&name),
        None => matches!(update.callback_token(), Some(Ok(CallbackToken::SubjectWise))),
    }
}

/// `/browse`, `/pdf_subjectwise` or the `subject_wise` button: one button per collection.
pub struct BrowseHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn DocumentStore>,
    menu_max_buttons: usize,
}

impl BrowseHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn DocumentStore>, menu_max_buttons: usize) -> Self {
        Self {
            bot,
            store,
            menu_max_buttons,
        }
    }
}

#[async_trait]
impl Handler for BrowseHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        if !wants_browse(update) {
            return Ok(HandlerResponse::Ignore);
        }
        let names = self.store.list_collections().await.map_err(store_error)?;
        info!(collections = names.len(), "step: collections listed");

        let menu = collections_menu(&names, self.menu_max_buttons);
        if menu.is_empty() {
            self.bot.send_message(&update.chat, NO_SUBJECTS).await?;
            return Ok(HandlerResponse::Reply(NO_SUBJECTS.to_string()));
        }
        let prompt = prompt_for(SELECT_SUBJECT, &menu);
        self.bot.send_menu(&update.chat, &prompt, &menu).await?;
        Ok(HandlerResponse::Reply(prompt))
    }
}

/// `subject_<name>` button: lists every document of that collection.
pub struct CollectionHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn DocumentStore>,
    menu_max_buttons: usize,
}

impl CollectionHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn DocumentStore>, menu_max_buttons: usize) -> Self {
        Self {
            bot,
            store,
            menu_max_buttons,
        }
    }
}

#[async_trait]
impl Handler for CollectionHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let Some(Ok(CallbackToken::Collection(name))) = update.callback_token() else {
            return Ok(HandlerResponse::Ignore);
        };
        let records = self.store.list_collection(&name).await.map_err(store_error)?;
        info!(collection = %name, documents = records.len(), "step: collection listed");

        let menu = documents_menu(&records, self.menu_max_buttons);
        if menu.is_empty() {
            self.bot.send_message(&update.chat, NO_FILES).await?;
            return Ok(HandlerResponse::Reply(NO_FILES.to_string()));
        }
        let prompt = prompt_for(SELECT_FILE, &menu);
        self.bot.send_menu(&update.chat, &prompt, &menu).await?;
        Ok(HandlerResponse::Reply(prompt))
    }
}
