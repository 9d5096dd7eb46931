//! Favorites ledger: one JSON object per line, stable append order.
//!
//! Writes hold the lock exclusively; reads share it. The duplicate check runs
//! under the write lock, so concurrent appends of the same pair cannot both
//! land. Malformed lines are skipped with a warning instead of failing the
//! whole read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::LedgerError;

/// One confirmed favorite pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub wine_name: String,
    pub dish_descriptor: String,
}

impl FavoriteEntry {
    /// Case-insensitive equality on both fields; used for duplicate suppression.
    pub fn matches(&self, wine_name: &str, dish_descriptor: &str) -> bool {
        self.wine_name.eq_ignore_ascii_case(wine_name)
            && self.dish_descriptor.eq_ignore_ascii_case(dish_descriptor)
    }
}

/// Result of an append attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The pair was written to the ledger.
    Added,
    /// An equal pair (case-insensitive) already existed; nothing was written.
    Duplicate,
}

/// Flat-file favorites store shared by all users.
pub struct FavoritesLedger {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FavoritesLedger {
    /// Creates a ledger backed by the given file. The file is created lazily
    /// on first append.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    /// All entries in append order.
    pub async fn list_all(&self) -> Result<Vec<FavoriteEntry>, LedgerError> {
        let _guard = self.lock.read().await;
        self.read_entries().await
    }

    /// True if an equal pair (case-insensitive on both fields) is recorded.
    pub async fn exists(
        &self,
        wine_name: &str,
        dish_descriptor: &str,
    ) -> Result<bool, LedgerError> {
        let _guard = self.lock.read().await;
        let entries = self.read_entries().await?;
        Ok(entries
            .iter()
            .any(|e| e.matches(wine_name, dish_descriptor)))
    }

    /// Appends the pair unless an equal one already exists.
    pub async fn append(
        &self,
        wine_name: &str,
        dish_descriptor: &str,
    ) -> Result<AppendOutcome, LedgerError> {
        let _guard = self.lock.write().await;

        // Re-check under the write lock; a concurrent append may have won.
        let entries = self.read_entries().await?;
        if entries
            .iter()
            .any(|e| e.matches(wine_name, dish_descriptor))
        {
            info!(
                wine_name = %wine_name,
                dish = %dish_descriptor,
                "Favorite already recorded, skipping append"
            );
            return Ok(AppendOutcome::Duplicate);
        }

        let entry = FavoriteEntry {
            wine_name: wine_name.to_string(),
            dish_descriptor: dish_descriptor.to_string(),
        };
        let mut line = serde_json::to_string(&entry)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!(
            wine_name = %wine_name,
            dish = %dish_descriptor,
            "Favorite appended to ledger"
        );
        Ok(AppendOutcome::Added)
    }

    async fn read_entries(&self) -> Result<Vec<FavoriteEntry>, LedgerError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<FavoriteEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(error = %e, line = %line, "Skipping malformed ledger line");
                }
            }
        }
        Ok(entries)
    }
}
