//! Pairing-score row as returned by the catalog.
//!
//! Only used to rank candidate dishes for a wine; the full dish record is
//! resolved separately by id.

use serde::{Deserialize, Serialize};

/// One scored pairing candidate: a dish id and its stored score.
/// Returned ordered by descending score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PairingHit {
    pub dish_id: i64,
    pub score: i64,
}
