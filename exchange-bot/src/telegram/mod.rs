//! Telegram connectivity: type adapters, the core Bot implementation, and the
//! REPL runner. No dialog logic lives here.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
