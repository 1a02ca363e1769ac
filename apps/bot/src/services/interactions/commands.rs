use tracing::info;

use super::{Dispatch, Dispatcher};
use crate::domain::{
    ChallengeSession, Choice, ComponentId, GameSession, SessionKey, SimulationSession,
};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::commands::{OBJECT_OPTION, SIM_COMMAND, TEST_COMMAND};
use crate::protocol::{Ack, ActionRow, ButtonStyle, CommandInvocation, Component, MessageData};
use crate::services::follow_up::Reply;

impl Dispatcher {
    pub(super) async fn on_command(
        &self,
        invocation: CommandInvocation,
    ) -> Result<Dispatch, DomainError> {
        match invocation.name.as_str() {
            TEST_COMMAND => self.start_test(invocation).await,
            SIM_COMMAND => self.open_challenge(invocation).await,
            other => Err(DomainError::validation(
                ValidationKind::UnknownCommand,
                format!("Unrecognized command `{other}`."),
            )),
        }
    }

    /// `test`: a fresh simulation keyed by the invoking user.
    async fn start_test(&self, invocation: CommandInvocation) -> Result<Dispatch, DomainError> {
        let key = SessionKey::new(invocation.user_id.clone());
        let session = GameSession::Simulation(SimulationSession::new(invocation.user_id.clone()));
        let replaced = self.sessions.create(key.clone(), session).await?;
        info!(session_key = %key, replaced, "Simulation created");

        let data = MessageData::text("Click to start the simulation.").with_row(ActionRow::of(
            vec![Component::button(
                ButtonStyle::Primary,
                "Start Sim",
                ComponentId::StartSimulation,
            )],
        ));
        Ok(Dispatch::Reply(Reply::ack(Ack::message(data))))
    }

    /// `sim`: a challenge keyed by the interaction id, carrying the challenger's pick.
    async fn open_challenge(&self, invocation: CommandInvocation) -> Result<Dispatch, DomainError> {
        let raw = invocation
            .option_str(OBJECT_OPTION)
            .or_else(|| invocation.options.first().and_then(|(_, v)| v.as_str()))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::MissingOption,
                    "Pick an object to challenge with.",
                )
            })?;
        let choice: Choice = raw.parse()?;

        let key = SessionKey::new(invocation.interaction_id.clone());
        let session = GameSession::Challenge(ChallengeSession::new(
            invocation.user_id.clone(),
            choice,
        ));
        self.sessions.create(key.clone(), session).await?;
        info!(session_key = %key, challenger = %invocation.user_id, "Challenge opened");

        let data = MessageData::text(format!(
            "Rock papers scissors challenge from <@{}>",
            invocation.user_id
        ))
        .with_row(ActionRow::of(vec![Component::button(
            ButtonStyle::Primary,
            "Accept",
            ComponentId::AcceptChallenge(key),
        )]));
        Ok(Dispatch::Reply(Reply::ack(Ack::message(data))))
    }
}
