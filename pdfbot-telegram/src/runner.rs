//! Dispatcher runner: converts teloxide messages and callback queries to core updates and passes them to the HandlerChain.
//!
//! Serves push updates through the axum webhook listener when a webhook is configured, long polling otherwise.
//! teloxide's dispatcher runs updates from different chats concurrently and keeps per-chat order.

use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use pdfbot_core::{ToCoreUpdate, Update as CoreUpdate};
use teloxide::dispatching::UpdateFilterExt;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, CallbackQuery, Message, Update};
use teloxide::update_listeners::webhooks;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::config::TelegramConfig;

/// This bot's @username, resolved once via getMe before dispatching.
#[derive(Debug, Clone, Default)]
pub struct BotUsername(pub Option<Arc<str>>);

impl BotUsername {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

fn bot_commands() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Show the main menu"),
        BotCommand::new("search", "Search PDFs by name"),
        BotCommand::new("browse", "Browse PDFs by subject"),
    ]
}

/// Runs the chain for one update; failures are logged and the update is dropped.
async fn run_chain(chain: &HandlerChain, update: CoreUpdate) {
    if let Err(e) = chain.handle(&update).await {
        if e.is_malformed_input() {
            warn!(error = %e, user_id = update.user.id, "Dropped update with malformed input");
        } else if e.is_store_unavailable() {
            error!(error = %e, user_id = update.user.id, "Document store unavailable, update dropped");
        } else {
            error!(error = %e, user_id = update.user.id, "Handler chain failed");
        }
    }
}

async fn handle_message(
    msg: Message,
    chain: HandlerChain,
    bot_username: BotUsername,
) -> ResponseResult<()> {
    match TelegramMessageWrapper(&msg, bot_username.as_deref()).to_core() {
        Some(update) => run_chain(&chain, update).await,
        None => info!(chat_id = msg.chat.id.0, "Ignored non-text message or foreign command"),
    }
    Ok(())
}

async fn handle_callback(q: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    match TelegramCallbackWrapper(&q).to_core() {
        Some(update) => run_chain(&chain, update).await,
        None => info!(user_id = q.from.id.0, "Ignored callback query without data"),
    }
    Ok(())
}

/// Resolves the bot username, registers the command list, then dispatches until Ctrl-C.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    config: &TelegramConfig,
) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().map(Arc::<str>::from);
            info!(username = ?username, "Bot username set before dispatch");
            BotUsername(username)
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; commands with @mention will be ignored");
            BotUsername::default()
        }
    };

    if let Err(e) = bot.set_my_commands(bot_commands()).await {
        warn!(error = %e, "setMyCommands failed");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![handler_chain, bot_username])
        .default_handler(|_upd| async {})
        .enable_ctrlc_handler()
        .build();

    match config.webhook {
        Some(ref webhook) => {
            let url = webhook.endpoint_url(&config.bot_token)?;
            let addr = webhook.listen_addr();
            info!(%addr, "Starting webhook listener");
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url))
                .await
                .context("Failed to set up webhook")?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("No WEBHOOK_URL set, using long polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
