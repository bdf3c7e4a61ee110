//! Session store port
//!
//! Holds the ordered turns of every conversation, keyed by session id.

use std::time::Duration;

use async_trait::async_trait;
use domain::{SessionId, Turn};
#[cfg(test)]
use mockall::automock;

/// Port for per-session dialog storage
///
/// Operations are infallible: the store is expected to live in process memory.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Snapshot of the session's turns, creating an empty session if unseen
    async fn get_or_create(&self, session: &SessionId) -> Vec<Turn>;

    /// Snapshot of the session's turns without creating it (unknown sessions are empty)
    async fn snapshot(&self, session: &SessionId) -> Vec<Turn>;

    /// Append a turn, creating the session if needed
    async fn append(&self, session: &SessionId, turn: Turn);

    /// Number of live sessions
    async fn session_count(&self) -> usize;

    /// Drop sessions idle for at least `older_than`, returning how many were removed
    async fn evict_idle(&self, older_than: Duration) -> usize;
}
