//! Document store selection: backend type and its connection settings.

use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MONGO_DATABASE: &str = "Telegram_bot";
pub const DEFAULT_COLLECTION: &str = "Telegram_bot";
pub const DEFAULT_SQLITE_URL: &str = "./data/documents.db";

/// DOCUMENT_STORE_TYPE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreType {
    #[default]
    Mongo,
    Sqlite,
    Memory,
}

impl FromStr for StoreType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreType::Mongo),
            "sqlite" => Ok(StoreType::Sqlite),
            "memory" => Ok(StoreType::Memory),
            other => anyhow::bail!(
                "DOCUMENT_STORE_TYPE must be one of mongo, sqlite, memory; got {}",
                other
            ),
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreType::Mongo => "mongo",
            StoreType::Sqlite => "sqlite",
            StoreType::Memory => "memory",
        })
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub store_type: StoreType,
    /// MONGO_URI; required for the mongo backend
    pub mongo_uri: Option<String>,
    /// MONGO_DATABASE
    pub mongo_database: String,
    /// DEFAULT_COLLECTION: scope of search and id lookup
    pub default_collection: String,
    /// DATABASE_URL: SQLite file for the sqlite backend
    pub database_url: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let store_type = match env::var("DOCUMENT_STORE_TYPE") {
            Ok(s) => s.parse()?,
            Err(_) => StoreType::default(),
        };
        Ok(Self {
            store_type,
            mongo_uri: env::var("MONGO_URI").ok().filter(|s| !s.trim().is_empty()),
            mongo_database: env::var("MONGO_DATABASE")
                .unwrap_or_else(|_| DEFAULT_MONGO_DATABASE.to_string()),
            default_collection: env::var("DEFAULT_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_SQLITE_URL.to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.store_type == StoreType::Mongo && self.mongo_uri.is_none() {
            anyhow::bail!("MONGO_URI is required when DOCUMENT_STORE_TYPE=mongo");
        }
        if self.default_collection.trim().is_empty() {
            anyhow::bail!("DEFAULT_COLLECTION must not be empty");
        }
        Ok(())
    }
}
