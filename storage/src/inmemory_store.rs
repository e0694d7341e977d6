//! # In-memory document store
//!
//! Simple in-process store for tests and local development.
//!
//! **Limitations**:
//! - Data is lost on restart
//! - Not suitable for production use
//!
//! Collections keep creation order and records keep insertion order, mirroring store iteration
//! order. Uses `Arc<RwLock<>>` so clones share the same data.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{name_matches, DocumentRecord};
use crate::store::DocumentStore;

#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<Vec<(String, Vec<DocumentRecord>)>>>,
    default_collection: String,
}

impl InMemoryDocumentStore {
    /// Creates an empty store. The default collection does not exist until something is inserted into it.
    pub fn new(default_collection: &str) -> Self {
        Self {
            collections: Arc::new(RwLock::new(Vec::new())),
            default_collection: default_collection.to_string(),
        }
    }

    /// Creates an empty collection if it does not exist yet.
    pub async fn create_collection(&self, name: &str) {
        let mut collections = self.collections.write().await;
        if !collections.iter().any(|(n, _)| n == name) {
            collections.push((name.to_string(), Vec::new()));
        }
    }

    /// Appends a record with a generated id to `collection`, creating it if needed.
    pub async fn insert(&self, collection: &str, file_name: &str, file_ref: &str) -> DocumentRecord {
        let record = DocumentRecord::new(Uuid::new_v4().simple().to_string(), file_name, file_ref);
        self.insert_record(collection, record.clone()).await;
        record
    }

    /// Appends an existing record (same id may live in several collections).
    pub async fn insert_record(&self, collection: &str, record: DocumentRecord) {
        let mut collections = self.collections.write().await;
        match collections.iter_mut().find(|(n, _)| n == collection) {
            Some((_, records)) => records.push(record),
            None => collections.push((collection.to_string(), vec![record])),
        }
    }

    /// Removes a record from every collection. Returns whether anything was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let mut collections = self.collections.write().await;
        let mut removed = false;
        for (_, records) in collections.iter_mut() {
            let before = records.len();
            records.retain(|r| r.id != id);
            removed |= records.len() != before;
        }
        removed
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn search_by_name(&self, query: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        let all = self.list_collection(&self.default_collection).await?;
        Ok(all
            .into_iter()
            .filter(|r| name_matches(&r.file_name, query))
            .collect())
    }

    async fn list_collection(&self, name: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        let collections = self.collections.read().await;
        Ok(collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, records)| records.clone())
            .unwrap_or_default())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<DocumentRecord>, StorageError> {
        let all = self.list_collection(&self.default_collection).await?;
        Ok(all.into_iter().find(|r| r.id == id))
    }

    async fn list_collections(&self) -> Result<Vec<String>, StorageError> {
        let collections = self.collections.read().await;
        Ok(collections.iter().map(|(n, _)| n.clone()).collect())
    }

    fn default_collection(&self) -> &str {
        &self.default_collection
    }
}
