//! # pdfbot-core
//!
//! Core types and traits for the PDF library bot: [`Bot`], [`Handler`], [`Update`] and friends,
//! the [`CallbackToken`] wire codec, the [`Menu`] renderer, and tracing initialization.
//! Transport-agnostic; used by pdfbot-telegram, handler-chain and handlers.

pub mod bot;
pub mod callback;
pub mod error;
pub mod logger;
pub mod menu;
pub mod types;

pub use bot::Bot;
pub use callback::{CallbackToken, TokenError, MAX_TOKEN_LEN};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use menu::{render, Menu, MenuButton};
pub use types::{
    Chat, Handler, HandlerResponse, SessionKey, ToCoreUpdate, ToCoreUser, Update, UpdateKind,
    User,
};
