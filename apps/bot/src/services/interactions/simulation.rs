use tracing::info;

use super::{source_message, Dispatch, Dispatcher, NO_ACTIVE_SIMULATION};
use crate::domain::{ComponentId, GameSession, SessionKey, TradeSide};
use crate::errors::domain::DomainError;
use crate::protocol::{Ack, ActionRow, ButtonStyle, Component, ComponentAction, MessageData};
use crate::services::follow_up::{FollowUp, Reply};

impl Dispatcher {
    /// One ack only: the buy/sell prompt. The price prompt waits for the
    /// next click.
    pub(super) async fn start_simulation(
        &self,
        action: &ComponentAction,
    ) -> Result<Dispatch, DomainError> {
        let key = SessionKey::new(action.user_id.clone());
        let Some(GameSession::Simulation(sim)) = self.sessions.get(&key).await? else {
            return Ok(no_simulation());
        };

        let started = sim.start()?;
        let current = GameSession::Simulation(sim);
        let swapped = self
            .sessions
            .compare_and_swap(&key, &current, GameSession::Simulation(started))
            .await?;
        if !swapped {
            return Ok(no_simulation());
        }
        info!(session_key = %key, "Simulation started");

        let data = MessageData::text("Do you want to buy or sell?")
            .ephemeral()
            .with_row(ActionRow::of(vec![
                Component::button(ButtonStyle::Primary, "Buy", ComponentId::Buy(key.clone())),
                Component::button(ButtonStyle::Danger, "Sell", ComponentId::Sell(key)),
            ]));
        let delete_start = source_message(action).map(FollowUp::DeleteMessage);

        Ok(Dispatch::Reply(Reply::ack(Ack::message(data)).then(delete_start)))
    }

    pub(super) async fn trade(
        &self,
        action: &ComponentAction,
        key: SessionKey,
        side: TradeSide,
    ) -> Result<Dispatch, DomainError> {
        let Some(GameSession::Simulation(sim)) = self.sessions.get(&key).await? else {
            return Ok(no_simulation());
        };

        let traded = sim.record_trade(&action.user_id, side)?;
        let current = GameSession::Simulation(sim);
        let swapped = self
            .sessions
            .compare_and_swap(&key, &current, GameSession::Simulation(traded))
            .await?;
        if !swapped {
            return Ok(no_simulation());
        }
        info!(session_key = %key, side = side.as_str(), "Simulation awaiting price");

        let chosen =
            MessageData::text(format!("You chose to {}.", side.as_str())).without_components();
        let patch = source_message(action).map(|target| FollowUp::PatchMessage(target, chosen));

        Ok(Dispatch::Reply(
            Reply::ack(Ack::ephemeral(
                "Simulation started. Please enter the stock price.",
            ))
            .then(patch),
        ))
    }
}

fn no_simulation() -> Dispatch {
    Dispatch::Reply(Reply::ack(Ack::ephemeral(NO_ACTIVE_SIMULATION)))
}
