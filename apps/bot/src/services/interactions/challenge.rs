use tracing::info;

use super::{source_message, Dispatch, Dispatcher, IgnoreReason};
use crate::domain::{random_emoji, shuffled_options, Choice, ComponentId, GameSession, SessionKey};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::{Ack, ActionRow, Component, ComponentAction, MessageData, SelectOption};
use crate::services::follow_up::{FollowUp, Reply};

impl Dispatcher {
    /// Show the opponent a private choice menu and remove the public challenge.
    pub(super) async fn accept_challenge(
        &self,
        action: &ComponentAction,
        key: SessionKey,
    ) -> Result<Dispatch, DomainError> {
        let delete_challenge = source_message(action).map(FollowUp::DeleteMessage);

        let open = matches!(
            self.sessions.get(&key).await?,
            Some(GameSession::Challenge(_))
        );
        if !open {
            info!(session_key = %key, "Accept on a closed challenge");
            let ack = Ack::ephemeral("This challenge is no longer available.");
            return Ok(Dispatch::Reply(Reply::ack(ack).then(delete_challenge)));
        }

        let options = shuffled_options(self.shuffler.as_ref())
            .into_iter()
            .map(SelectOption::from)
            .collect();
        let data = MessageData::text("What is your object of choice?")
            .ephemeral()
            .with_row(ActionRow::of(vec![Component::select(
                ComponentId::SelectChoice(key),
                options,
            )]));

        Ok(Dispatch::Reply(
            Reply::ack(Ack::message(data)).then(delete_challenge),
        ))
    }

    /// Settle the challenge with the opponent's pick. The session is
    /// consumed with compare-and-delete so a double click resolves once.
    pub(super) async fn select_choice(
        &self,
        action: &ComponentAction,
        key: SessionKey,
    ) -> Result<Dispatch, DomainError> {
        let Some(stored) = self.sessions.get(&key).await? else {
            return Ok(self.ignore(action, IgnoreReason::SessionNotFound(key)));
        };
        let GameSession::Challenge(challenge) = &stored else {
            return Ok(self.ignore(action, IgnoreReason::SessionNotFound(key)));
        };

        let raw = action.values.first().ok_or_else(|| {
            DomainError::validation(ValidationKind::MissingOption, "Pick an object first.")
        })?;
        let choice: Choice = raw.parse()?;
        let challenge = challenge.clone();
        if !self.sessions.compare_and_delete(&key, &stored).await? {
            return Ok(self.ignore(action, IgnoreReason::SessionNotFound(key)));
        }

        let result = challenge.resolve(action.user_id.clone(), choice);
        info!(session_key = %key, outcome = ?result.outcome, "Challenge resolved");

        let confirmation = MessageData::text(format!(
            "Nice choice {}",
            random_emoji(self.shuffler.as_ref())
        ))
        .without_components();
        let patch =
            source_message(action).map(|target| FollowUp::PatchMessage(target, confirmation));

        Ok(Dispatch::Reply(
            Reply::ack(Ack::message(MessageData::text(result.describe()))).then(patch),
        ))
    }
}
