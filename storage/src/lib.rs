//! Storage crate: the metadata store adapter behind the bot's search and browse flows.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – DocumentRecord and filename matching
//! - [`store`] – DocumentStore trait
//! - [`mongo_store`] – MongoDocumentStore (production)
//! - [`sqlite_store`] – SqliteDocumentStore (development)
//! - [`inmemory_store`] – InMemoryDocumentStore (tests)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod inmemory_store;
mod models;
mod mongo_store;
mod sqlite_pool;
mod sqlite_store;
mod store;

pub use error::StorageError;
pub use inmemory_store::InMemoryDocumentStore;
pub use models::{name_matches, DocumentRecord};
pub use mongo_store::MongoDocumentStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteDocumentStore;
pub use store::DocumentStore;
