//! Per-user conversation state: the pending flow, the age flag, and the
//! pairing awaiting a rating.

use vinobot_catalog::Dish;

/// The multi-turn flow a user is currently inside. `Idle` means no pending
/// question; a fresh session starts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    /// Waiting for a DD.MM.YYYY birth date after /start.
    AwaitingAge,
    /// Waiting for free text naming a wine after a bare /pair.
    AwaitingWineName,
    /// Waiting for yes/no after a rating request.
    AwaitingRatingConfirm,
}

/// The most recently resolved pairing, awaiting a rating. `wine_name` is the
/// user's search input as typed, not the canonical catalog name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingContext {
    pub wine_name: String,
    pub dish: Dish,
}

/// Everything the engine tracks for one user. In-memory only, not persisted
/// across restarts. `age_verified` is never unset once true.
#[derive(Debug, Default)]
pub struct UserSession {
    pub state: ConversationState,
    pub age_verified: bool,
    pub pairing: Option<PairingContext>,
}
