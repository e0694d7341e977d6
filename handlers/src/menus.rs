//! User-facing texts and the menus built from store results.

use pdfbot_core::{render, CallbackToken, Menu};
use storage::DocumentRecord;
use tracing::warn;

pub const WELCOME_TEXT: &str = "🤖 Welcome! Choose an option:";
pub const SEARCH_PROMPT: &str = "Enter the PDF name to search:";
pub const SELECT_SUBJECT: &str = "Select a subject:";
pub const NO_SUBJECTS: &str = "❌ No subjects found.";
pub const SELECT_FILE: &str = "Select a file:";
pub const NO_FILES: &str = "❌ No files found.";
pub const FILE_UNAVAILABLE: &str = "❌ This file is no longer available.";

/// Top-level menu: search or browse.
pub fn main_menu() -> Menu {
    render([
        ("🔍 Search PDF", CallbackToken::SearchPdf),
        ("📚 PDF SubjectWise", CallbackToken::SubjectWise),
    ])
}

/// One `📁 <name>` button per collection. Names that cannot be carried in a token are skipped.
pub fn collections_menu(names: &[String], max_buttons: usize) -> Menu {
    let items = names.iter().filter_map(|name| match CallbackToken::collection(name.as_str()) {
        Ok(token) => Some((format!("📁 {name}"), token)),
        Err(e) => {
            warn!(error = %e, "Collection omitted from menu");
            None
        }
    });
    render(items.collect::<Vec<_>>()).truncate(max_buttons)
}

/// One `📄 <file_name>` button per record, in store order.
pub fn documents_menu(records: &[DocumentRecord], max_buttons: usize) -> Menu {
    let items = records.iter().filter_map(|record| match CallbackToken::document(record.id.as_str()) {
        Ok(token) => Some((format!("📄 {}", record.file_name), token)),
        Err(e) => {
            warn!(error = %e, file_name = %record.file_name, "Document omitted from menu");
            None
        }
    });
    render(items.collect::<Vec<_>>()).truncate(max_buttons)
}

/// Menu prompt, with a notice when the menu was truncated.
pub fn prompt_for(text: &str, menu: &Menu) -> String {
    match menu.truncated_from() {
        Some(total) => format!(
            "{text}\n\nShowing the first {} of {total} results.",
            menu.len()
        ),
        None => text.to_string(),
    }
}
