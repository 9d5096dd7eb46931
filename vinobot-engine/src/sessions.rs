//! Keyed session store with per-user exclusive access.
//!
//! The map itself is behind an RwLock taken only to look up or create an
//! entry; each entry is an `Arc<Mutex<UserSession>>` held by the engine for
//! the whole of one message, so messages from the same user serialize while
//! different users never block each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use vinobot_core::UserId;

use crate::state::UserSession;

/// UserId -> session map shared by all in-flight message tasks.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<UserSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session entry for the user, creating it on first contact.
    pub async fn session(&self, user: UserId) -> Arc<Mutex<UserSession>> {
        if let Some(session) = self.sessions.read().await.get(&user) {
            return session.clone();
        }
        let mut map = self.sessions.write().await;
        map.entry(user)
            .or_insert_with(|| Arc::new(Mutex::new(UserSession::default())))
            .clone()
    }

    /// Number of users with a session entry.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
