//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::Result;
use handler_chain::HandlerChain;
use handlers::{build_router, RouterDeps, SearchSessions};
use pdfbot_core::Bot as CoreBot;
use pdfbot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use std::sync::Arc;
use storage::{DocumentStore, InMemoryDocumentStore, MongoDocumentStore, SqliteDocumentStore};
use tracing::{error, info, instrument};

use super::config::{BotConfig, StoreConfig, StoreType};

/// Core dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub store: Arc<dyn DocumentStore>,
    pub router_deps: RouterDeps,
}

impl BotComponents {
    pub fn sessions(&self) -> &SearchSessions {
        &self.router_deps.sessions
    }
}

/// Opens the document store selected by DOCUMENT_STORE_TYPE.
#[instrument(skip(config), fields(store_type = %config.store_type))]
pub async fn create_document_store(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.store_type {
        StoreType::Mongo => {
            let uri = config
                .mongo_uri
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("MONGO_URI not set"))?;
            Arc::new(
                MongoDocumentStore::connect(uri, &config.mongo_database, &config.default_collection)
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Failed to initialize MongoDB store");
                        anyhow::anyhow!("Failed to initialize MongoDB store: {}", e)
                    })?,
            )
        }
        StoreType::Sqlite => {
            info!(database_url = %config.database_url, "Using SQLite document store");
            Arc::new(
                SqliteDocumentStore::new(&config.database_url, &config.default_collection)
                    .await
                    .map_err(|e| {
                        error!(error = %e, database_url = %config.database_url, "Failed to initialize SQLite store");
                        anyhow::anyhow!("Failed to initialize SQLite store: {}", e)
                    })?,
            )
        }
        StoreType::Memory => {
            info!("Using in-memory document store");
            Arc::new(InMemoryDocumentStore::new(&config.default_collection))
        }
    };
    Ok(store)
}

/// Builds BotComponents around an already opened store.
///
/// When `handler_bot_override` is `Some`, handlers send through it instead of Telegram (tests).
#[instrument(skip(config, store, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    store: Arc<dyn DocumentStore>,
    handler_bot_override: Option<Arc<dyn CoreBot>>,
) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(config.telegram());
    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));

    info!(
        default_collection = %store.default_collection(),
        menu_max_buttons = config.handlers.menu_max_buttons,
        session_ttl = ?config.handlers.session_ttl,
        "Bot components built"
    );

    BotComponents {
        teloxide_bot,
        router_deps: RouterDeps::new(handler_bot, store.clone(), config.handlers.clone()),
        store,
    }
}

pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    build_router(&components.router_deps)
}
