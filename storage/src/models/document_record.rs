//! Document record model: one stored PDF as the bot sees it.

use serde::{Deserialize, Serialize};

/// Metadata for one deliverable file. Read-only from the bot's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DocumentRecord {
    /// Store-assigned identifier (ObjectId hex for MongoDB).
    pub id: String,
    /// Display filename.
    pub file_name: String,
    /// Transport-native file handle; re-sent without upload.
    pub file_ref: String,
}

impl DocumentRecord {
    pub fn new(
        id: impl Into<String>,
        file_name: impl Into<String>,
        file_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
            file_ref: file_ref.into(),
        }
    }
}

/// Case-insensitive substring match used by every backend that filters in process.
pub fn name_matches(file_name: &str, query: &str) -> bool {
    file_name.to_lowercase().contains(&query.to_lowercase())
}
