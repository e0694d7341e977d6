//! SQLite-backed document store for development and tests.
//!
//! One `documents` table; the `collection` column plays the role of a MongoDB collection and
//! insertion order (`seq`) is the iteration order.

use async_trait::async_trait;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{name_matches, DocumentRecord};
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool_manager: SqlitePoolManager,
    default_collection: String,
}

impl SqliteDocumentStore {
    pub async fn new(database_url: &str, default_collection: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self {
            pool_manager,
            default_collection: default_collection.to_string(),
        };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating documents table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL,
                collection TEXT NOT NULL,
                file_name TEXT NOT NULL,
                file_ref TEXT NOT NULL,
                UNIQUE(id, collection)
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Seeds one record with a generated id. Not part of [`DocumentStore`]: the bot never writes.
    pub async fn insert(
        &self,
        collection: &str,
        file_name: &str,
        file_ref: &str,
    ) -> Result<DocumentRecord, StorageError> {
        let record = DocumentRecord::new(Uuid::new_v4().simple().to_string(), file_name, file_ref);
        self.insert_record(collection, &record).await?;
        Ok(record)
    }

    /// Adds an existing record to `collection`. The same id may live in several collections,
    /// e.g. a subject collection and the default one.
    pub async fn insert_record(
        &self,
        collection: &str,
        record: &DocumentRecord,
    ) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO documents (id, collection, file_name, file_ref) VALUES (?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(collection)
        .bind(&record.file_name)
        .bind(&record.file_ref)
        .execute(self.pool_manager.pool())
        .await?;

        info!(id = %record.id, collection = %collection, "Inserted document");
        Ok(())
    }

    /// Removes a record everywhere it appears. Returns whether anything was deleted.
    pub async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    #[instrument(skip(self))]
    async fn search_by_name(&self, query: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        // SQLite's lower()/LIKE only fold ASCII; filter in process for Unicode-aware matching.
        let all = self.list_collection(&self.default_collection).await?;
        Ok(all
            .into_iter()
            .filter(|r| name_matches(&r.file_name, query))
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_collection(&self, name: &str) -> Result<Vec<DocumentRecord>, StorageError> {
        let records = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, file_name, file_ref FROM documents WHERE collection = ? ORDER BY seq",
        )
        .bind(name)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<DocumentRecord>, StorageError> {
        let record = sqlx::query_as::<_, DocumentRecord>(
            "SELECT id, file_name, file_ref FROM documents WHERE id = ? AND collection = ?",
        )
        .bind(id)
        .bind(&self.default_collection)
        .fetch_optional(self.pool_manager.pool())
        .await?;
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> Result<Vec<String>, StorageError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT collection FROM documents GROUP BY collection ORDER BY MIN(seq)",
        )
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    fn default_collection(&self) -> &str {
        &self.default_collection
    }
}
