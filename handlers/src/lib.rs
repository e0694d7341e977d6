//! # Handlers for pdfbot
//!
//! The router's handlers (start, search prompt and query, browse, collection listing, delivery,
//! callback acknowledgment, logging), the menus they send, and per-session search state.

mod browse;
mod callback_ack;
mod config;
mod delivery;
mod logging;
mod menus;
mod router;
mod search;
mod session;
mod start;

#[cfg(test)]
mod test;

pub use browse::{BrowseHandler, CollectionHandler};
pub use callback_ack::CallbackAckHandler;
pub use config::{HandlerConfig, DEFAULT_MENU_MAX_BUTTONS, DEFAULT_SESSION_TTL};
pub use delivery::DeliveryHandler;
pub use logging::LoggingHandler;
pub use menus::{
    collections_menu, documents_menu, main_menu, prompt_for, FILE_UNAVAILABLE, NO_FILES,
    NO_SUBJECTS, SEARCH_PROMPT, SELECT_FILE, SELECT_SUBJECT, WELCOME_TEXT,
};
pub use router::{build_router, RouterDeps};
pub use search::{SearchPromptHandler, SearchQueryHandler};
pub use session::SearchSessions;
pub use start::StartHandler;

fn store_error(e: storage::StorageError) -> pdfbot_core::BotError {
    if e.is_connection() {
        pdfbot_core::BotError::StoreUnavailable(e.to_string())
    } else {
        pdfbot_core::BotError::Store(e.to_string())
    }
}
