//! REPL runner: converts teloxide messages to core messages and passes them
//! to the handler chain, spawned per message. Reply responses from the chain
//! are delivered through the adapter.

use anyhow::Result;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};
use xbot_core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot, handler chain, and sender.
/// Each text message is converted to a core message and handled in its own
/// task; non-text messages are logged and skipped.
#[instrument(skip(bot, sender, handler_chain))]
pub async fn run_repl(
    bot: teloxide::Bot,
    sender: Arc<dyn CoreBot>,
    handler_chain: HandlerChain,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved before repl");
        }
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let sender = sender.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        message_content = %text,
                        "Received message"
                    );
                }
                None => {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message, skipping"
                    );
                    return Ok(());
                }
            }

            tokio::spawn(async move {
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = sender.reply_to(&core_msg, &text).await {
                            error!(error = %e, user_id = core_msg.user.id, "Failed to send reply");
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
