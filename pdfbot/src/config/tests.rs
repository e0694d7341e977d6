//! Config tests.

use crate::config::{BotConfig, StoreType};
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: [&str; 15] = [
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "WEBHOOK_URL",
    "PORT",
    "LOG_FILE",
    "DOCUMENT_STORE_TYPE",
    "MONGO_URI",
    "MONGO_DATABASE",
    "DEFAULT_COLLECTION",
    "DATABASE_URL",
    "MENU_MAX_BUTTONS",
    "SEARCH_SESSION_TTL_SECS",
    "NOTIFY_MISSING_DOCUMENT",
    "RUST_LOG",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram().telegram_api_url.is_none());
    assert!(config.telegram().webhook.is_none());
    assert_eq!(config.log_file(), "logs/pdfbot.log");
    assert_eq!(config.store.store_type, StoreType::Mongo);
    assert!(config.store.mongo_uri.is_none());
    assert_eq!(config.store.mongo_database, "Telegram_bot");
    assert_eq!(config.store.default_collection, "Telegram_bot");
    assert_eq!(config.store.database_url, "./data/documents.db");
    assert_eq!(config.handlers.menu_max_buttons, 100);
    assert!(!config.handlers.notify_missing_document);
    assert_eq!(config.handlers.session_ttl, Some(Duration::from_secs(600)));

    // Mongo is the default backend and needs a URI.
    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("WEBHOOK_URL", "https://materials-bot.example.com");
    env::set_var("PORT", "8443");
    env::set_var("LOG_FILE", "/tmp/pdfbot-test.log");
    env::set_var("DOCUMENT_STORE_TYPE", "sqlite");
    env::set_var("DATABASE_URL", "custom.db");
    env::set_var("DEFAULT_COLLECTION", "Library");
    env::set_var("MENU_MAX_BUTTONS", "0");
    env::set_var("SEARCH_SESSION_TTL_SECS", "0");
    env::set_var("NOTIFY_MISSING_DOCUMENT", "true");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    let webhook = config.telegram().webhook.as_ref().unwrap();
    assert_eq!(webhook.port, 8443);
    assert_eq!(config.log_file(), "/tmp/pdfbot-test.log");
    assert_eq!(config.store.store_type, StoreType::Sqlite);
    assert_eq!(config.store.database_url, "custom.db");
    assert_eq!(config.store.default_collection, "Library");
    assert_eq!(config.handlers.menu_max_buttons, 0);
    assert!(config.handlers.notify_missing_document);
    assert!(config.handlers.session_ttl.is_none());
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_token_argument_overrides_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("DOCUMENT_STORE_TYPE", "memory");

    let config = BotConfig::load(Some("cli_token".to_string())).unwrap();
    assert_eq!(config.bot_token(), "cli_token");
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_missing_token_is_an_error() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();
    env::set_var("BOT_TOKEN", "t");

    env::set_var("DOCUMENT_STORE_TYPE", "redis");
    assert!(BotConfig::load(None).is_err());
    env::set_var("DOCUMENT_STORE_TYPE", "MongoDB");
    env::set_var("MONGO_URI", "mongodb://localhost:27017");
    assert!(BotConfig::load(None).unwrap().validate().is_ok());

    env::set_var("MENU_MAX_BUTTONS", "lots");
    assert!(BotConfig::load(None).is_err());
    env::remove_var("MENU_MAX_BUTTONS");

    env::set_var("NOTIFY_MISSING_DOCUMENT", "maybe");
    assert!(BotConfig::load(None).is_err());
    env::remove_var("NOTIFY_MISSING_DOCUMENT");

    env::set_var("TELEGRAM_API_URL", "not a url");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    clear_env();
}
