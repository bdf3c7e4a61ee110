//! Per-session mutual exclusion for orchestration cycles

use std::{collections::HashMap, fmt, sync::Arc};

use domain::SessionId;
use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Hands out one permit per session at a time
///
/// Cycles for different sessions never wait on each other. Lock entries are
/// removed as soon as no permit holds or waits on them.
#[derive(Default)]
pub struct SessionGate {
    locks: Mutex<HashMap<SessionId, Arc<AsyncMutex<()>>>>,
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("active_sessions", &self.active_sessions())
            .finish()
    }
}

impl SessionGate {
    /// Create an empty gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other permit for `session` is alive
    ///
    /// Dropping the returned future while it waits gives up the place in
    /// line and prunes the entry if nothing else uses it.
    pub async fn acquire(&self, session: &SessionId) -> SessionPermit<'_> {
        let lock = {
            let mut locks = self.locks.lock();
            Arc::clone(locks.entry(session.clone()).or_default())
        };

        // Declared before the wait so it is dropped after it on cancellation
        let slot = SessionSlot {
            gate: self,
            session: session.clone(),
            lock: Some(Arc::clone(&lock)),
        };

        let guard = lock.lock_owned().await;

        SessionPermit { _guard: guard, slot }
    }

    /// Number of sessions with a live or pending permit
    pub fn active_sessions(&self) -> usize {
        self.locks.lock().len()
    }
}

/// A reference to one session's lock entry, held while waiting and while permitted
struct SessionSlot<'a> {
    gate: &'a SessionGate,
    session: SessionId,
    lock: Option<Arc<AsyncMutex<()>>>,
}

impl Drop for SessionSlot<'_> {
    fn drop(&mut self) {
        let mut locks = self.gate.locks.lock();
        drop(self.lock.take());
        if locks
            .get(&self.session)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.session);
        }
    }
}

/// Exclusive access to one session until dropped
pub struct SessionPermit<'a> {
    // Field order matters: the guard is released before the slot prunes
    _guard: OwnedMutexGuard<()>,
    slot: SessionSlot<'a>,
}

impl fmt::Debug for SessionPermit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionPermit")
            .field("session", &self.slot.session)
            .finish_non_exhaustive()
    }
}
