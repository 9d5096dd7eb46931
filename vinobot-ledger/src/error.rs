//! Ledger error types.

use thiserror::Error;

/// Errors that can occur when reading or appending to the favorites file.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ledger serialization error: {0}")]
    Serialization(String),
}
