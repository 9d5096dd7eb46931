//! Catalog error types.
//!
//! Used by the repository and by callers of catalog APIs. "Not found" is not an
//! error here; lookups return `Option` or an empty `Vec`.

use thiserror::Error;

/// Errors that can occur when using catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid data: {0}")]
    Invalid(String),
}

impl From<sqlx::Error> for CatalogError {
    fn from(e: sqlx::Error) -> Self {
        CatalogError::Database(e.to_string())
    }
}
