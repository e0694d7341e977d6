//! Callback token codec: the wire format between rendered buttons and the router.
//!
//! Exact tokens `search_pdf` and `subject_wise` take precedence over the `subject_` and `file_`
//! prefixes. Everything after a prefix is the payload, so a collection name may contain `_`.

use std::fmt;

use thiserror::Error;

/// Telegram caps `callback_data` at 64 bytes.
pub const MAX_TOKEN_LEN: usize = 64;

const SEARCH_PDF: &str = "search_pdf";
const SUBJECT_WISE: &str = "subject_wise";
const COLLECTION_PREFIX: &str = "subject_";
const DOCUMENT_PREFIX: &str = "file_";

/// Decoded button token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallbackToken {
    /// Top-level "Search PDF".
    SearchPdf,
    /// Top-level "PDF SubjectWise".
    SubjectWise,
    /// A collection was picked while browsing.
    Collection(String),
    /// A document was picked from a result list.
    Document(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token matches none of the known prefixes.
    #[error("Unrecognized callback token: {0}")]
    Unrecognized(String),

    /// The prefix is known but the payload is unusable.
    #[error("Malformed callback token: {0}")]
    Malformed(String),

    /// The value cannot be carried in a token.
    #[error("Cannot encode {kind} `{value}`: {reason}")]
    Unencodable {
        kind: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl CallbackToken {
    /// Builds a collection token, rejecting names that cannot round-trip.
    pub fn collection(name: impl Into<String>) -> Result<Self, TokenError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("empty name")
        } else if COLLECTION_PREFIX.len() + name.len() > MAX_TOKEN_LEN {
            Some("token too long")
        } else if format!("{COLLECTION_PREFIX}{name}") == SUBJECT_WISE {
            Some("collides with a reserved token")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(TokenError::Unencodable {
                kind: "collection",
                value: name,
                reason,
            }),
            None => Ok(Self::Collection(name)),
        }
    }

    /// Builds a document token, rejecting ids that cannot round-trip.
    pub fn document(id: impl Into<String>) -> Result<Self, TokenError> {
        let id = id.into();
        let reason = if id.is_empty() {
            Some("empty id")
        } else if DOCUMENT_PREFIX.len() + id.len() > MAX_TOKEN_LEN {
            Some("token too long")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(TokenError::Unencodable {
                kind: "document",
                value: id,
                reason,
            }),
            None => Ok(Self::Document(id)),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            Self::SearchPdf => SEARCH_PDF.to_string(),
            Self::SubjectWise => SUBJECT_WISE.to_string(),
            Self::Collection(name) => format!("{COLLECTION_PREFIX}{name}"),
            Self::Document(id) => format!("{DOCUMENT_PREFIX}{id}"),
        }
    }

    pub fn parse(data: &str) -> Result<Self, TokenError> {
        match data {
            SEARCH_PDF => return Ok(Self::SearchPdf),
            SUBJECT_WISE => return Ok(Self::SubjectWise),
            _ => {}
        }
        if let Some(name) = data.strip_prefix(COLLECTION_PREFIX) {
            if name.is_empty() {
                return Err(TokenError::Malformed(data.to_string()));
            }
            return Ok(Self::Collection(name.to_string()));
        }
        if let Some(id) = data.strip_prefix(DOCUMENT_PREFIX) {
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(TokenError::Malformed(data.to_string()));
            }
            return Ok(Self::Document(id.to_string()));
        }
        Err(TokenError::Unrecognized(data.to_string()))
    }
}

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
