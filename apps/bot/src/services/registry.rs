//! Session registry.
//!
//! [`SessionStore`] is the seam the dispatcher is written against. The
//! in-memory implementation keeps sessions in a `DashMap`; each operation
//! runs under the key's shard lock, so `take`, `compare_and_swap` and
//! `compare_and_delete` are atomic per key and a session is consumed at
//! most once even when two clicks race.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::domain::{GameSession, SessionKey};
use crate::errors::domain::DomainError;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(15 * 60);

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert `session`, replacing whatever the key held. Returns `true` if a
    /// live session was replaced.
    async fn create(&self, key: SessionKey, session: GameSession) -> Result<bool, DomainError>;

    /// Live session under `key`; expired entries read as absent.
    async fn get(&self, key: &SessionKey) -> Result<Option<GameSession>, DomainError>;

    /// Remove the key. Returns `true` if a live session was removed.
    async fn delete(&self, key: &SessionKey) -> Result<bool, DomainError>;

    /// Remove and return the live session; only one caller ever gets it.
    async fn take(&self, key: &SessionKey) -> Result<Option<GameSession>, DomainError>;

    /// Replace the session only if it still equals `expected`.
    async fn compare_and_swap(
        &self,
        key: &SessionKey,
        expected: &GameSession,
        next: GameSession,
    ) -> Result<bool, DomainError>;

    /// Remove the session only if it still equals `expected`.
    async fn compare_and_delete(
        &self,
        key: &SessionKey,
        expected: &GameSession,
    ) -> Result<bool, DomainError>;

    /// Drop every expired session, returning how many went.
    async fn purge_expired(&self) -> Result<usize, DomainError>;

    /// Number of live sessions.
    async fn len(&self) -> Result<usize, DomainError>;
}

#[derive(Debug, Clone)]
struct StoredSession {
    session: GameSession,
    created_at: Instant,
}

impl StoredSession {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

pub struct InMemorySessionStore {
    entries: DashMap<SessionKey, StoredSession>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, key: SessionKey, session: GameSession) -> Result<bool, DomainError> {
        let stored = StoredSession {
            session,
            created_at: Instant::now(),
        };
        let replaced = self
            .entries
            .insert(key, stored)
            .is_some_and(|old| !old.is_expired(self.ttl));
        Ok(replaced)
    }

    async fn get(&self, key: &SessionKey) -> Result<Option<GameSession>, DomainError> {
        // The read guard must be released before `remove_if` takes the shard lock.
        let live = match self.entries.get(key) {
            None => return Ok(None),
            Some(entry) if !entry.is_expired(self.ttl) => Some(entry.session.clone()),
            Some(_) => None,
        };
        if live.is_none() {
            if self
                .entries
                .remove_if(key, |_, entry| entry.is_expired(self.ttl))
                .is_some()
            {
                debug!(session_key = %key, "Expired session dropped on lookup");
            }
        }
        Ok(live)
    }

    async fn delete(&self, key: &SessionKey) -> Result<bool, DomainError> {
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !entry.is_expired(self.ttl)))
    }

    async fn take(&self, key: &SessionKey) -> Result<Option<GameSession>, DomainError> {
        Ok(self
            .entries
            .remove(key)
            .filter(|(_, entry)| !entry.is_expired(self.ttl))
            .map(|(_, entry)| entry.session))
    }

    async fn compare_and_swap(
        &self,
        key: &SessionKey,
        expected: &GameSession,
        next: GameSession,
    ) -> Result<bool, DomainError> {
        match self.entries.get_mut(key) {
            Some(mut entry) if !entry.is_expired(self.ttl) && entry.session == *expected => {
                entry.session = next;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn compare_and_delete(
        &self,
        key: &SessionKey,
        expected: &GameSession,
    ) -> Result<bool, DomainError> {
        Ok(self
            .entries
            .remove_if(key, |_, entry| {
                !entry.is_expired(self.ttl) && entry.session == *expected
            })
            .is_some())
    }

    async fn purge_expired(&self) -> Result<usize, DomainError> {
        let mut purged = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(self.ttl);
            if !keep {
                purged += 1;
            }
            keep
        });
        Ok(purged)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_expired(self.ttl))
            .count())
    }
}

/// Periodically purge expired sessions until the runtime shuts down.
pub fn spawn_reaper(store: Arc<dyn SessionStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "Purged expired sessions"),
                Err(err) => error!(error = %err, "Session purge failed"),
            }
        }
    })
}
