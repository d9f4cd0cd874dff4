//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram adapter in the binary crate
//! implements it via teloxide. Tests substitute recording fakes.

use crate::error::Result;
use crate::types::{Chat, Keyboard, Message};
use async_trait::async_trait;

/// Abstraction for sending messages, with or without a reply keyboard.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with a reply-keyboard spec (show rows or remove).
    async fn send_with_keyboard(&self, chat: &Chat, text: &str, keyboard: &Keyboard) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
