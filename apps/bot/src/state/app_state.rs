use std::sync::Arc;

use crate::auth::SignatureVerifier;
use crate::services::follow_up::FollowUpRunner;
use crate::services::interactions::Dispatcher;
use crate::services::registry::SessionStore;

/// Shared resources handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    /// Same store the dispatcher uses; exposed for health and the reaper.
    pub sessions: Arc<dyn SessionStore>,
    pub follow_ups: FollowUpRunner,
    pub verifier: Arc<SignatureVerifier>,
}
