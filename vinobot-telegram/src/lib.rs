//! # vinobot-telegram
//!
//! Telegram transport layer: [`vinobot_core::Bot`] implementation over teloxide,
//! keyboard rendering for the engine's hints, env config, and the repl runner.
//! Handles only connectivity; all conversation logic lives in vinobot-engine.

mod bot_adapter;
mod config;
mod keyboard;
mod runner;

pub use bot_adapter::TelegramBotAdapter;
pub use config::BotConfig;
pub use keyboard::{main_menu_markup, yes_no_markup};
pub use runner::run_repl;
