//! Storage error types.
//!
//! Used by document store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when querying a document store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store could not be reached. Not retried.
    #[error("Store unavailable: {0}")]
    Connection(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Decode error: {0}")]
    Decode(String),
}

impl StorageError {
    pub fn is_connection(&self) -> bool {
        matches!(self, StorageError::Connection(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StorageError::Connection(e.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StorageError::Decode(e.to_string())
            }
            _ => StorageError::Database(e.to_string()),
        }
    }
}

impl From<mongodb::error::Error> for StorageError {
    fn from(e: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
                StorageError::Connection(e.to_string())
            }
            ErrorKind::BsonDeserialization(_) => StorageError::Decode(e.to_string()),
            _ => StorageError::Database(e.to_string()),
        }
    }
}
