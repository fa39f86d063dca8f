//! Keyed async mutexes serializing operations on one lobby.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::LobbyId;

type LockMap = DashMap<LobbyId, Arc<Mutex<()>>>;

/// One mutex per lobby, created on first use and evicted when the last
/// holder or waiter lets go.
#[derive(Clone, Default)]
pub struct LobbyLocks {
    inner: Arc<LockMap>,
}

/// Exclusive access to one lobby. Dropping it releases the lobby.
pub struct LobbyGuard {
    guard: Option<OwnedMutexGuard<()>>,
    lobby_id: LobbyId,
    map: Arc<LockMap>,
}

impl Drop for LobbyGuard {
    fn drop(&mut self) {
        // Release the mutex first so the map holds the only remaining Arc.
        drop(self.guard.take());
        // Waiters clone the Arc under the shard lock, so a count of one means
        // nobody else can reach this mutex.
        self.map.remove_if(&self.lobby_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

impl LobbyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `lobby_id`.
    pub async fn lock(&self, lobby_id: LobbyId) -> LobbyGuard {
        // Clone the Arc out so the shard lock is released before awaiting.
        let mutex = self
            .inner
            .entry(lobby_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        LobbyGuard {
            guard: Some(mutex.lock_owned().await),
            lobby_id,
            map: Arc::clone(&self.inner),
        }
    }

    /// Lobbies with a mutex currently in the map.
    pub fn active_lobbies(&self) -> usize {
        self.inner.len()
    }
}
