//! # PDF library bot application
//!
//! Wires storage, handlers, handler-chain and pdfbot-telegram. Loads config from env, opens the
//! document store, and runs the dispatcher (webhook or long polling).

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, create_document_store, BotComponents};
pub use config::{BaseConfig, BotConfig, StoreConfig, StoreType};
pub use runner::{
    build_handler_chain_only, collection_counts, list_collections, run_bot, spawn_session_pruner,
};
