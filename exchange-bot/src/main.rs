//! Binary entry point for the exchange calculator bot.

use anyhow::Result;
use clap::Parser;
use exchange_bot::{run_bot, BotConfig, Cli, Commands};
use xbot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            init_tracing(config.log_file.as_deref())?;
            run_bot(config).await
        }
    }
}
