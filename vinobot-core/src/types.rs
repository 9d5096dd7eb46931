//! Core types: user identity and the outbound message shape the engine produces.

use serde::{Deserialize, Serialize};

/// Stable identifier for one conversation (one per chat).
/// Keys all per-user state in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hint for the transport about which reply keyboard to render, if any.
/// The engine never touches transport keyboard types directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardHint {
    /// The three-row command keyboard shown with menu-like responses.
    MainMenu,
    /// One-time yes/no keyboard shown with the rating confirmation prompt.
    YesNo,
}

/// Response produced by the engine for a single inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    pub keyboard: Option<KeyboardHint>,
}

impl OutboundMessage {
    /// Plain text response without a keyboard.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    /// Response with a keyboard hint attached.
    pub fn with_keyboard(text: impl Into<String>, keyboard: KeyboardHint) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}
