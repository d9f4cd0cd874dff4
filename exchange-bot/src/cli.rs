//! Command-line interface for the bot binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "exchange-bot", about = "Telegram RUB → USDT → THB exchange calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling).
    Run {
        /// Telegram bot token; overrides BOT_TOKEN from the environment.
        #[arg(long)]
        token: Option<String>,
    },
}
