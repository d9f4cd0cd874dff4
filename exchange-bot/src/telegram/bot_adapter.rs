//! Wraps teloxide::Bot and implements [`xbot_core::Bot`]. Production code
//! sends messages via Telegram; tests substitute recording fakes.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};
use xbot_core::{Bot as CoreBot, Chat, Keyboard, Result, XbotError};

/// Thin wrapper around teloxide::Bot implementing the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Maps a core keyboard spec to Telegram reply markup.
fn to_reply_markup(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Reply(rows) => {
            let buttons = rows
                .iter()
                .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())));
            ReplyMarkup::Keyboard(KeyboardMarkup::new(buttons).resize_keyboard())
        }
        Keyboard::Remove => ReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| XbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_with_keyboard(&self, chat: &Chat, text: &str, keyboard: &Keyboard) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_reply_markup(keyboard))
            .await
            .map_err(|e| XbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
