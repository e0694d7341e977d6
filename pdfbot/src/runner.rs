use anyhow::Result;
use handler_chain::HandlerChain;
use handlers::SearchSessions;
use pdfbot_core::{init_tracing, Bot as CoreBot};
use pdfbot_telegram::run_dispatcher;
use std::sync::Arc;
use std::time::Duration;
use storage::DocumentStore;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use super::components::{build_bot_components, build_handler_chain, create_document_store};
use super::config::{BotConfig, StoreConfig};

/// How often idle search sessions are swept.
const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically evicts expired search sessions. Returns `None` when sessions never expire.
pub fn spawn_session_pruner(sessions: SearchSessions, ttl: Option<Duration>) -> Option<JoinHandle<()>> {
    if ttl.is_none() {
        return None;
    }
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = sessions.prune_expired().await;
            if removed > 0 {
                debug!(removed, "Pruned idle search sessions");
            }
        }
    }))
}

/// Main entry: validate config, init logging, open the store, build the router, then dispatch.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        store_type = %config.store.store_type,
        webhook = config.telegram().webhook.is_some(),
        "Initializing bot"
    );

    let store = create_document_store(&config.store).await?;
    let components = build_bot_components(&config, store, None);
    let handler_chain = build_handler_chain(&components);
    let pruner = spawn_session_pruner(components.sessions().clone(), config.handlers.session_ttl);

    info!("Bot started successfully");
    let result = run_dispatcher(components.teloxide_bot.clone(), handler_chain, config.telegram()).await;

    if let Some(pruner) = pruner {
        pruner.abort();
    }
    info!("Bot stopped");
    result
}

/// Builds the handler chain without starting the dispatcher. Used by integration tests that
/// inject a recording bot and a seeded store and drive the chain with fake updates.
#[instrument(skip(config, store, handler_bot))]
pub fn build_handler_chain_only(
    config: &BotConfig,
    store: Arc<dyn DocumentStore>,
    handler_bot: Arc<dyn CoreBot>,
) -> HandlerChain {
    let components = build_bot_components(config, store, Some(handler_bot));
    build_handler_chain(&components)
}

/// Collection names with record counts, in store order. No Telegram connection is made.
#[instrument(skip(config))]
pub async fn list_collections(config: &StoreConfig) -> Result<Vec<(String, usize)>> {
    config.validate()?;
    let store = create_document_store(config).await?;
    collection_counts(store.as_ref()).await
}

pub async fn collection_counts(store: &dyn DocumentStore) -> Result<Vec<(String, usize)>> {
    let mut counts = Vec::new();
    for name in store.list_collections().await? {
        let records = store.list_collection(&name).await?;
        counts.push((name, records.len()));
    }
    Ok(counts)
}
