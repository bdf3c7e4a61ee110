//! In-memory session store
//!
//! Keeps every session's turns in a single map behind one coarse lock. Each
//! session remembers when it was last written or created so idle sessions can
//! be evicted when an idle TTL is configured.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use application::ports::SessionStore;
use async_trait::async_trait;
use domain::{SessionId, Turn};
use parking_lot::RwLock;
use tracing::debug;

#[derive(Debug)]
struct SessionEntry {
    turns: Vec<Turn>,
    last_active: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            turns: Vec::new(),
            last_active: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Instant::now();
    }
}

/// Session store living for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, session: &SessionId) -> Vec<Turn> {
        let mut sessions = self.sessions.write();
        let entry = sessions.entry(session.clone()).or_insert_with(|| {
            debug!(session = %session, "Session created");
            SessionEntry::new()
        });
        entry.touch();
        entry.turns.clone()
    }

    async fn snapshot(&self, session: &SessionId) -> Vec<Turn> {
        self.sessions
            .read()
            .get(session)
            .map(|entry| entry.turns.clone())
            .unwrap_or_default()
    }

    async fn append(&self, session: &SessionId, turn: Turn) {
        let mut sessions = self.sessions.write();
        let entry = sessions
            .entry(session.clone())
            .or_insert_with(SessionEntry::new);
        entry.turns.push(turn);
        entry.touch();
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    async fn evict_idle(&self, older_than: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) < older_than);
        before - sessions.len()
    }
}
