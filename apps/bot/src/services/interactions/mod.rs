//! Interaction dispatcher.
//!
//! Routes a classified [`InteractionEvent`] to its handler and turns the
//! handler's result into a [`Dispatch`]. Validation failures a user can
//! trigger (unknown command, stale control, wrong phase) become ephemeral
//! acks here; only infrastructure failures reach the HTTP layer as errors.

mod challenge;
mod commands;
mod simulation;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ComponentId, SessionKey, Shuffler, TradeSide};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::protocol::{Ack, ComponentAction, InteractionEvent};
use crate::services::follow_up::{MessageTarget, Reply};
use crate::services::registry::SessionStore;

pub const NO_ACTIVE_SIMULATION: &str = "No active simulation found.";

#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Reply(Reply),
    /// Nothing to say to the user; the boundary still acknowledges the event.
    Ignored(IgnoreReason),
}

impl Dispatch {
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Dispatch::Reply(reply) => Some(reply),
            Dispatch::Ignored(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The challenge was already resolved, expired, or never existed.
    SessionNotFound(SessionKey),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::SessionNotFound(key) => write!(f, "session_not_found key={key}"),
        }
    }
}

pub struct Dispatcher {
    sessions: Arc<dyn SessionStore>,
    shuffler: Arc<dyn Shuffler>,
}

impl Dispatcher {
    pub fn new(sessions: Arc<dyn SessionStore>, shuffler: Arc<dyn Shuffler>) -> Self {
        Self { sessions, shuffler }
    }

    pub async fn dispatch(&self, event: InteractionEvent) -> Result<Dispatch, AppError> {
        let result = match event {
            InteractionEvent::Handshake => {
                debug!("Handshake");
                Ok(Dispatch::Reply(Reply::ack(Ack::Pong)))
            }
            InteractionEvent::Command(invocation) => self.on_command(invocation).await,
            InteractionEvent::Component(action) => self.on_component(action).await,
        };

        match result {
            Ok(dispatch) => Ok(dispatch),
            Err(DomainError::Validation(kind, detail)) => {
                info!(kind = ?kind, detail = %detail, "Interaction rejected");
                Ok(Dispatch::Reply(Reply::ack(Ack::ephemeral(detail))))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn on_component(&self, action: ComponentAction) -> Result<Dispatch, DomainError> {
        let component: ComponentId = action.custom_id.parse()?;
        debug!(
            interaction_id = %action.interaction_id,
            kind = component.kind(),
            session_key = component.session_key().map(SessionKey::as_str),
            "Component action"
        );

        match component {
            ComponentId::AcceptChallenge(key) => self.accept_challenge(&action, key).await,
            ComponentId::SelectChoice(key) => self.select_choice(&action, key).await,
            ComponentId::StartSimulation => self.start_simulation(&action).await,
            ComponentId::Buy(key) => self.trade(&action, key, TradeSide::Buy).await,
            ComponentId::Sell(key) => self.trade(&action, key, TradeSide::Sell).await,
        }
    }

    fn ignore(&self, action: &ComponentAction, reason: IgnoreReason) -> Dispatch {
        warn!(
            interaction_id = %action.interaction_id,
            reason = %reason,
            "Component action dropped"
        );
        Dispatch::Ignored(reason)
    }
}

/// Follow-up address of the message that carried the clicked control.
fn source_message(action: &ComponentAction) -> Option<MessageTarget> {
    action.message_id.as_ref().map(|message_id| MessageTarget {
        token: action.token.clone(),
        message_id: message_id.clone(),
    })
}
