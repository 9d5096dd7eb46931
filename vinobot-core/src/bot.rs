//! Bot abstraction for sending responses back to a conversation.
//!
//! Transport-agnostic; the Telegram implementation lives in vinobot-telegram.
//! Tests substitute a recording implementation.

use crate::error::Result;
use crate::types::{OutboundMessage, UserId};
use async_trait::async_trait;

/// Abstraction for delivering an [`OutboundMessage`] to a conversation.
/// Implementations map to a transport (e.g. Telegram) and render the keyboard hint.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends the response to the given conversation.
    async fn send(&self, user: UserId, message: &OutboundMessage) -> Result<()>;
}
