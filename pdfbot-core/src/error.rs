use thiserror::Error;

use crate::callback::TokenError;

#[derive(Error, Debug)]
pub enum BotError {
    /// The document store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed callback token: {0}")]
    MalformedToken(#[from] TokenError),
}

impl BotError {
    /// Errors that are expected noise (bad tokens) rather than failures worth alerting on.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, BotError::MalformedToken(_))
    }

    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, BotError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
