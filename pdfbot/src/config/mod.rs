//! Bot configuration: BaseConfig (Telegram + log) + StoreConfig (document store) + handler knobs.

mod base;
mod bot_config;
mod store;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use store::{StoreConfig, StoreType, DEFAULT_COLLECTION, DEFAULT_MONGO_DATABASE, DEFAULT_SQLITE_URL};
