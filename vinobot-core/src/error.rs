use thiserror::Error;

/// Errors a [`crate::Bot`] implementation can produce when delivering a
/// message. Catalog and ledger failures never reach this type; the engine
/// turns them into response text.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
