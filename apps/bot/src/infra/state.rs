use std::sync::Arc;
use std::time::Duration;

use crate::auth::SignatureVerifier;
use crate::config::Config;
use crate::domain::{RandomShuffler, Shuffler};
use crate::error::AppError;
use crate::services::follow_up::{FollowUpExecutor, FollowUpRunner};
use crate::services::interactions::Dispatcher;
use crate::services::registry::{InMemorySessionStore, SessionStore, DEFAULT_SESSION_TTL};
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    public_key_hex: Option<String>,
    session_ttl: Duration,
    store: Option<Arc<dyn SessionStore>>,
    shuffler: Option<Arc<dyn Shuffler>>,
    executor: Option<Arc<dyn FollowUpExecutor>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            public_key_hex: None,
            session_ttl: DEFAULT_SESSION_TTL,
            store: None,
            shuffler: None,
            executor: None,
        }
    }

    pub fn from_config(self, config: &Config) -> Self {
        self.with_public_key_hex(config.public_key.clone())
            .with_session_ttl(config.session_ttl)
    }

    pub fn with_public_key_hex(mut self, public_key: impl Into<String>) -> Self {
        self.public_key_hex = Some(public_key.into());
        self
    }

    /// Ignored when a store is supplied with [`StateBuilder::with_store`].
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_shuffler(mut self, shuffler: Arc<dyn Shuffler>) -> Self {
        self.shuffler = Some(shuffler);
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn FollowUpExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let public_key = self
            .public_key_hex
            .ok_or_else(|| AppError::config("public key not configured"))?;
        let verifier = SignatureVerifier::from_hex(&public_key)?;
        let executor = self
            .executor
            .ok_or_else(|| AppError::config("follow-up executor not configured"))?;

        let sessions = self
            .store
            .unwrap_or_else(|| Arc::new(InMemorySessionStore::new(self.session_ttl)));
        let shuffler = self
            .shuffler
            .unwrap_or_else(|| Arc::new(RandomShuffler::new(None)));

        Ok(AppState {
            dispatcher: Arc::new(Dispatcher::new(sessions.clone(), shuffler)),
            sessions,
            follow_ups: FollowUpRunner::new(executor),
            verifier: Arc::new(verifier),
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
