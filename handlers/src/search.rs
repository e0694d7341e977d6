//! Search flow: the prompt that arms a session, and the free-text query that consumes it.

use std::sync::Arc;

use async_trait::async_trait;
use pdfbot_core::{Bot, CallbackToken, Handler, HandlerResponse, Result, Update};
use storage::DocumentStore;
use tracing::{info, instrument};

use crate::menus::{documents_menu, prompt_for, NO_FILES, SEARCH_PROMPT, SELECT_FILE};
use crate::session::SearchSessions;
use crate::store_error;

const SEARCH_COMMANDS: [&str; 2] = ["search", "search_pdf"];

fn wants_search(update: &Update) -> bool {
    match update.command() {
        Some(name) => SEARCH_COMMANDS.contains(&name),
        None => matches!(update.callback_token(), Some(Ok(CallbackToken::SearchPdf))),
    }
}

/// `/search`, `/search_pdf` or the `search_pdf` button: asks for a term and marks the session.
pub struct SearchPromptHandler {
    bot: Arc<dyn Bot>,
    sessions: SearchSessions,
}

impl SearchPromptHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: SearchSessions) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for SearchPromptHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        if !wants_search(update) {
            return Ok(HandlerResponse::Ignore);
        }
        // Armed before prompting so a quick reply cannot outrun the flag.
        self.sessions.begin_search(update.session_key()).await;
        self.bot.send_message(&update.chat, SEARCH_PROMPT).await?;
        info!(chat_id = update.chat.id, "step: search prompt sent");
        Ok(HandlerResponse::Reply(SEARCH_PROMPT.to_string()))
    }
}

/// Free text while a search is pending: looks the term up and lists matches.
pub struct SearchQueryHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn DocumentStore>,
    sessions: SearchSessions,
    menu_max_buttons: usize,
}

impl SearchQueryHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn DocumentStore>,
        sessions: SearchSessions,
        menu_max_buttons: usize,
    ) -> Self {
        Self {
            bot,
            store,
            sessions,
            menu_max_buttons,
        }
    }
}

#[async_trait]
impl Handler for SearchQueryHandler {
    #[instrument(skip(self, update), fields(user_id = update.user.id))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let Some(query) = update.text() else {
            return Ok(HandlerResponse::Ignore);
        };
        if !self.sessions.take_pending_search(update.session_key()).await {
            return Ok(HandlerResponse::Ignore);
        }

        let results = self.store.search_by_name(query).await.map_err(store_error)?;
        info!(query = %query, results = results.len(), "step: search finished");

        let menu = documents_menu(&results, self.menu_max_buttons);
        if menu.is_empty() {
            self.bot.send_message(&update.chat, NO_FILES).await?;
            return Ok(HandlerResponse::Reply(NO_FILES.to_string()));
        }
        let prompt = prompt_for(SELECT_FILE, &menu);
        self.bot.send_menu(&update.chat, &prompt, &menu).await?;
        Ok(HandlerResponse::Reply(prompt))
    }
}
