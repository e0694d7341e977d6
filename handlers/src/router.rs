//! Command router: the handler chain whose order is the dispatch precedence.

use std::sync::Arc;

use handler_chain::HandlerChain;
use pdfbot_core::Bot;
use storage::DocumentStore;

use crate::browse::{BrowseHandler, CollectionHandler};
use crate::callback_ack::CallbackAckHandler;
use crate::config::HandlerConfig;
use crate::delivery::DeliveryHandler;
use crate::logging::LoggingHandler;
use crate::search::{SearchPromptHandler, SearchQueryHandler};
use crate::session::SearchSessions;
use crate::start::StartHandler;

/// Everything the router's handlers share. Built once at startup.
#[derive(Clone)]
pub struct RouterDeps {
    pub bot: Arc<dyn Bot>,
    pub store: Arc<dyn DocumentStore>,
    pub sessions: SearchSessions,
    pub config: HandlerConfig,
}

impl RouterDeps {
    /// Fresh session map using the configured TTL.
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn DocumentStore>, config: HandlerConfig) -> Self {
        Self {
            bot,
            store,
            sessions: SearchSessions::new(config.session_ttl),
            config,
        }
    }
}

/// Every handler returns `Ignore` for updates it does not own, so at most one acts per update.
/// The search query handler is last: free text only counts once nothing else claimed it.
pub fn build_router(deps: &RouterDeps) -> HandlerChain {
    let max = deps.config.menu_max_buttons;
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CallbackAckHandler::new(deps.bot.clone())))
        .add_handler(Arc::new(StartHandler::new(deps.bot.clone())))
        .add_handler(Arc::new(SearchPromptHandler::new(
            deps.bot.clone(),
            deps.sessions.clone(),
        )))
        .add_handler(Arc::new(BrowseHandler::new(
            deps.bot.clone(),
            deps.store.clone(),
            max,
        )))
        .add_handler(Arc::new(CollectionHandler::new(
            deps.bot.clone(),
            deps.store.clone(),
            max,
        )))
        .add_handler(Arc::new(DeliveryHandler::new(
            deps.bot.clone(),
            deps.store.clone(),
            deps.config.notify_missing_document,
        )))
        .add_handler(Arc::new(SearchQueryHandler::new(
            deps.bot.clone(),
            deps.store.clone(),
            deps.sessions.clone(),
            max,
        )))
}
