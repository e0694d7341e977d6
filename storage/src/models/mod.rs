//! Storage models.

mod document_record;

pub use document_record::{name_matches, DocumentRecord};
