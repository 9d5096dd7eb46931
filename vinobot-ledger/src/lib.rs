//! Ledger crate: append-only persisted list of confirmed favorite pairings.
//!
//! ## Modules
//!
//! - [`error`] – Ledger error types
//! - [`favorites`] – FavoritesLedger (JSON-lines flat file)

mod error;
mod favorites;

pub use error::LedgerError;
pub use favorites::{AppendOutcome, FavoriteEntry, FavoritesLedger};
