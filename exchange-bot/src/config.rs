//! Bot configuration, loaded from environment variables.

use anyhow::Result;
use std::env;

/// Runtime config: Telegram access plus the optional spreadsheet source.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; required.
    pub bot_token: String,
    /// SPREADSHEET_ID; unset means fallback-only rates.
    pub spreadsheet_id: Option<String>,
    /// SHEETS_API_KEY; unset means fallback-only rates.
    pub sheets_api_key: Option<String>,
    /// LOG_FILE; unset means console-only logging.
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN when given;
    /// a missing token is fatal at startup.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        Ok(Self {
            bot_token,
            spreadsheet_id: env::var("SPREADSHEET_ID").ok().filter(|s| !s.is_empty()),
            sheets_api_key: env::var("SHEETS_API_KEY").ok().filter(|s| !s.is_empty()),
            log_file: env::var("LOG_FILE").ok(),
        })
    }

    /// Constructs a config with only a token, everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            spreadsheet_id: None,
            sheets_api_key: None,
            log_file: None,
        }
    }
}
