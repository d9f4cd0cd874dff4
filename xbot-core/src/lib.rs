//! # xbot-core
//!
//! Core types and traits for the exchange calculator bot: [`Bot`], [`Handler`],
//! message and keyboard types, error types, and tracing initialization.
//! Transport-agnostic; the Telegram adapter lives in the binary crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, Result, XbotError};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Keyboard, Message, ToCoreMessage, ToCoreUser, User};
