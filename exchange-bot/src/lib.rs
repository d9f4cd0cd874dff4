//! # exchange-bot
//!
//! Telegram bot that walks users through RUB → USDT → THB exchange
//! calculations: dialog sequencer, keyboards, teloxide adapters, config,
//! and the polling runner.

pub mod cli;
pub mod config;
pub mod dialog;
pub mod runner;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use dialog::{Command, DialogHandler, DialogState, RatesHandler, SessionStore};
pub use runner::{build_rate_provider, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
