//! # vinobot-engine
//!
//! The conversation core: per-user state machine, command dispatch table, and
//! pairing resolver. Maps `(UserId, raw text)` to an [`vinobot_core::OutboundMessage`]
//! plus state/context side effects. Transport- and storage-agnostic apart from
//! the catalog and ledger adapter crates.

mod age;
mod command;
mod engine;
mod format;
mod resolver;
mod sessions;
mod state;

pub use command::{resolve_command, Command, COMMAND_MARKER};
pub use engine::Engine;
pub use resolver::PairingResolver;
pub use sessions::SessionStore;
pub use state::{ConversationState, PairingContext, UserSession};
