//! Catalog crate: wine, dish, and pairing-score storage.
//!
//! ## Modules
//!
//! - [`error`] – Catalog error types
//! - [`models`] – Wine, WineType, Dish, DishCategory, PairingHit
//! - [`catalog_repo`] – CatalogRepository (SQLite)
//! - [`sqlite_pool`] – CatalogPool

mod catalog_repo;
mod error;
mod models;
mod sqlite_pool;

#[cfg(test)]
mod catalog_repo_test;

pub use catalog_repo::CatalogRepository;
pub use error::CatalogError;
pub use models::{Dish, DishCategory, PairingHit, Wine, WineType};
pub use sqlite_pool::CatalogPool;
