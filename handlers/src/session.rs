//! Conversation state: the per-session `pending_search` flag.
//!
//! Absent entries read as "no search pending". Entries idle longer than the TTL are treated as
//! absent and removed by [`SearchSessions::prune_expired`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use pdfbot_core::SessionKey;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct SessionState {
    pending_search: bool,
    last_seen: Instant,
}

/// Shared session map. Clones share the same state.
#[derive(Debug, Clone)]
pub struct SearchSessions {
    inner: Arc<RwLock<HashMap<SessionKey, SessionState>>>,
    ttl: Option<Duration>,
}

impl Default for SearchSessions {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SearchSessions {
    /// `ttl == None` keeps sessions for the process lifetime.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn is_expired(&self, state: &SessionState, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.duration_since(state.last_seen) >= ttl,
            None => false,
        }
    }

    /// Marks the session as waiting for a search term.
    pub async fn begin_search(&self, key: SessionKey) {
        let mut sessions = self.inner.write().await;
        sessions.insert(
            key,
            SessionState {
                pending_search: true,
                last_seen: Instant::now(),
            },
        );
        debug!(chat_id = key.chat_id, user_id = key.user_id, "Search pending");
    }

    /// Reads and clears the flag under one write lock, so a pending search is consumed once.
    pub async fn take_pending_search(&self, key: SessionKey) -> bool {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        match sessions.remove(&key) {
            Some(state) => state.pending_search && !self.is_expired(&state, now),
            None => false,
        }
    }

    /// Non-consuming read.
    pub async fn is_pending(&self, key: SessionKey) -> bool {
        let now = Instant::now();
        let sessions = self.inner.read().await;
        sessions
            .get(&key)
            .map(|state| state.pending_search && !self.is_expired(state, now))
            .unwrap_or(false)
    }

    /// Drops idle sessions. Returns how many were removed.
    pub async fn prune_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, state| !self.is_expired(state, now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
