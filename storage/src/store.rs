//! The document store seam. Handlers only see [`DocumentStore`]; backends live beside it.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::DocumentRecord;

/// Read-only lookups against a collection-oriented store.
///
/// Results come back in store iteration order; nothing is ranked or paginated.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Case-insensitive substring match on the filename within the default collection.
    async fn search_by_name(&self, query: &str) -> Result<Vec<DocumentRecord>, StorageError>;

    /// Every record of the named collection. Unknown collection → empty.
    async fn list_collection(&self, name: &str) -> Result<Vec<DocumentRecord>, StorageError>;

    /// Point lookup in the default collection. Unknown or unparseable id → `None`.
    async fn get_by_id(&self, id: &str) -> Result<Option<DocumentRecord>, StorageError>;

    /// Collection names as they exist at call time.
    async fn list_collections(&self) -> Result<Vec<String>, StorageError>;

    /// Name of the collection used for search and id lookup.
    fn default_collection(&self) -> &str;
}
