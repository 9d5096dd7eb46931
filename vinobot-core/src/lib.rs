//! # vinobot-core
//!
//! Core types and traits for the wine-pairing bot: [`Bot`], user identity, outbound
//! message types, error taxonomy, and tracing initialization. Transport-agnostic;
//! used by vinobot-engine and vinobot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{KeyboardHint, OutboundMessage, UserId};
