//! MongoDB-backed document store.
//!
//! Records are documents with `_id` (ObjectId), `File Name` and `File ID` fields. Collections are
//! subjects; the default collection holds every document.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info, instrument, warn};

use crate::error::StorageError;
use crate::models::DocumentRecord;
use crate::store::DocumentStore;

const FILE_NAME_FIELD: &str = "File Name";
const FILE_REF_FIELD: &str = "File ID";

/// Store over one MongoDB database.
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Database,
    default_collection: String,
}

impl MongoDocumentStore {
    /// Parses the URI and selects `database`. The driver connects lazily, so an unreachable
    /// server surfaces as [`StorageError::Connection`] on the first query.
    pub async fn connect(
        uri: &str,
        database: &str,
        default_collection: &str,
    ) -> Result<Self, StorageError> {
        info!(database = %database, default_collection = %default_collection, "Connecting to MongoDB");
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database),
            default_collection: default_collection.to_string(),
        })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    async fn fetch(&self, name: &str, filter: Document) -> Result<Vec<DocumentRecord>, StorageError> {
        let cursor = self.collection(name).find(filter).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs.iter().filter_map(record_from_document).collect())
    }
}

/// Converts a raw document; records missing a filename or file handle are skipped.
fn record_from_document(doc: &Document) -> Option<DocumentRecord> {
    let id = match doc.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return None,
    };
    match (doc.get_str(FILE_NAME_FIELD), doc.get_str(FILE_REF_FIELD)) {
        (Ok(file_name), Ok(file_ref)) => Some(DocumentRecord::new(id, file_name, file_ref)),
        _ => {
            warn!(id = %id, "Skipping document without `File Name` / `File ID`");
            None
        }
    }
}

/// Filter matching `query` literally and case-insensitively inside the filename.
fn name_filter(query: &str) -> Document {
    doc! { "File Name": { "$regex": regex::escape(query), "$options": "i" } }
}

/// `_id` filter: ObjectId when the id parses as one, plain string otherwise.
fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": oid },
        Err(_) => doc! { "_id": id },
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        let records = self.fetch(&self.default_collection, name_filter(query)).await?;
        debug!(count = records.len(), "search_by_name done");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn list_collection(&self, name: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        // A missing collection is just an empty cursor in MongoDB.
        self.fetch(name, Document::new()).await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<DocumentRecord>, StorageError> {
        let found = self
            .collection(&self.default_collection)
            .find_one(id_filter(id))
            .await?;
        Ok(found.as_ref().and_then(record_from_document))
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.db.list_collection_names().await?)
    }

    fn default_collection(&self) -> &str {
        &self.default_collection
    }
}
