//! Idle session cleanup task
//!
//! Periodically evicts sessions that have not been touched within the
//! configured idle TTL.

use std::{sync::Arc, time::Duration};

use application::SessionStore;
use tracing::{debug, info};

/// Spawn a background task that periodically evicts idle sessions.
///
/// The first sweep runs one `interval` after startup. Abort the returned
/// handle on shutdown.
pub fn spawn_session_cleanup_task(
    sessions: Arc<dyn SessionStore>,
    idle_ttl: Duration,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    info!(
        idle_ttl_secs = idle_ttl.as_secs(),
        interval_secs = interval.as_secs(),
        "Starting session cleanup task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Skip the immediate first tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = sessions.evict_idle(idle_ttl).await;
            if removed > 0 {
                let remaining = sessions.session_count().await;
                info!(
                    removed_count = removed,
                    remaining = remaining,
                    "Evicted idle sessions"
                );
            } else {
                debug!("No idle sessions to evict");
            }
        }
    })
}
