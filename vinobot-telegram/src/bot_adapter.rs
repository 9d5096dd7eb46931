//! Wraps teloxide::Bot and implements [`vinobot_core::Bot`]. Production code
//! sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use vinobot_core::{Bot as CoreBot, BotError, KeyboardHint, OutboundMessage, Result, UserId};

use crate::keyboard::{main_menu_markup, yes_no_markup};

/// Thin wrapper around teloxide::Bot that renders keyboard hints and sends.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, user: UserId, message: &OutboundMessage) -> Result<()> {
        let request = self.bot.send_message(ChatId(user.0), message.text.clone());
        let request = match message.keyboard {
            Some(KeyboardHint::MainMenu) => request.reply_markup(main_menu_markup()),
            Some(KeyboardHint::YesNo) => request.reply_markup(yes_no_markup()),
            None => request,
        };
        request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
