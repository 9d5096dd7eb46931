//! Repl runner: converts teloxide messages to `(UserId, text)` and passes them
//! to the engine, sending the engine's response back through the adapter.
//! The engine call is awaited inside the handler so same-chat updates apply
//! in arrival order; only the outbound send runs in its own task.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};
use vinobot_core::{Bot as CoreBot, UserId};
use vinobot_engine::Engine;

use crate::bot_adapter::TelegramBotAdapter;

/// Starts the repl with the given teloxide Bot and engine.
/// The chat id keys the conversation; non-text messages are ignored.
#[instrument(skip(bot, engine))]
pub async fn run_repl(bot: teloxide::Bot, engine: Arc<Engine>) -> Result<()> {
    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));

    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let engine = engine.clone();
            let adapter = adapter.clone();

            async move {
                let user = UserId(msg.chat.id.0);

                let Some(text) = msg.text().map(|s| s.to_string()) else {
                    info!(user_id = %user, "Received non-text message, ignoring");
                    return Ok(());
                };

                info!(
                    user_id = %user,
                    message_content = %text,
                    "Received message"
                );

                // Await the engine here: spawning it would let a later update
                // from the same chat win the session lock first. The send has
                // no ordering contract and runs in its own task.
                let response = engine.handle_message(user, &text).await;
                tokio::spawn(async move {
                    if let Err(e) = adapter.send(user, &response).await {
                        error!(error = %e, user_id = %user, "Failed to send response");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
