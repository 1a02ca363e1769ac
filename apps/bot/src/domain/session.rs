//! In-progress game sessions and their transitions.
//!
//! Sessions are plain values. Every transition returns a new value so the
//! registry can apply it with compare-and-swap; nothing here touches shared
//! state.

use std::collections::BTreeMap;
use std::fmt;

use super::choices::{resolve, Choice, Outcome};
use crate::errors::domain::{DomainError, ValidationKind};

/// Opaque key threaded through control identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSession {
    Challenge(ChallengeSession),
    Simulation(SimulationSession),
}

impl GameSession {
    pub fn kind(&self) -> &'static str {
        match self {
            GameSession::Challenge(_) => "challenge",
            GameSession::Simulation(_) => "simulation",
        }
    }
}

/// A rock-paper-scissors challenge waiting for an opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSession {
    pub challenger_id: String,
    pub challenger_choice: Choice,
    /// Player id to submitted choice; `None` until submitted.
    pub players: BTreeMap<String, Option<Choice>>,
}

impl ChallengeSession {
    pub fn new(challenger_id: impl Into<String>, challenger_choice: Choice) -> Self {
        let challenger_id = challenger_id.into();
        let mut players = BTreeMap::new();
        players.insert(challenger_id.clone(), Some(challenger_choice));
        Self {
            challenger_id,
            challenger_choice,
            players,
        }
    }

    /// Record the opponent's choice and settle the challenge.
    pub fn resolve(
        mut self,
        opponent_id: impl Into<String>,
        opponent_choice: Choice,
    ) -> ChallengeResult {
        let opponent_id = opponent_id.into();
        self.players.insert(opponent_id.clone(), Some(opponent_choice));
        ChallengeResult {
            challenger: (self.challenger_id, self.challenger_choice),
            opponent: (opponent_id, opponent_choice),
            outcome: resolve(self.challenger_choice, opponent_choice),
        }
    }
}

/// Settled challenge; `outcome` is from the challenger's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResult {
    pub challenger: (String, Choice),
    pub opponent: (String, Choice),
    pub outcome: Outcome,
}

impl ChallengeResult {
    /// Channel text announcing the result.
    pub fn describe(&self) -> String {
        let (winner, loser) = match self.outcome {
            Outcome::SecondWins => (&self.opponent, &self.challenger),
            Outcome::FirstWins | Outcome::Draw => (&self.challenger, &self.opponent),
        };
        match winner.1.verb_against(loser.1) {
            Some(verb) => format!(
                "<@{}>'s **{}** {verb} <@{}>'s **{}**",
                winner.0, winner.1, loser.0, loser.1
            ),
            None => format!(
                "<@{}> and <@{}> draw with **{}**",
                winner.0, loser.0, winner.1
            ),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    /// Created by the `test` command, start button not yet clicked.
    Created,
    /// Buy/sell prompt shown.
    AwaitingTrade,
    /// Side recorded; the price prompt has been shown.
    AwaitingPrice,
}

/// The stock simulation started by the `test` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationSession {
    pub owner_id: String,
    pub players: BTreeMap<String, Option<TradeSide>>,
    pub stock_price: u32,
    pub phase: SimPhase,
}

impl SimulationSession {
    pub fn new(owner_id: impl Into<String>) -> Self {
        let owner_id = owner_id.into();
        let mut players = BTreeMap::new();
        players.insert(owner_id.clone(), None);
        Self {
            owner_id,
            players,
            stock_price: 0,
            phase: SimPhase::Created,
        }
    }

    /// `Created -> AwaitingTrade`. Clicking start again while the prompt is
    /// open is allowed and leaves the session unchanged.
    pub fn start(&self) -> Result<Self, DomainError> {
        match self.phase {
            SimPhase::Created | SimPhase::AwaitingTrade => Ok(Self {
                phase: SimPhase::AwaitingTrade,
                ..self.clone()
            }),
            SimPhase::AwaitingPrice => Err(DomainError::validation(
                ValidationKind::WrongPhase,
                "This simulation is already waiting for a price.",
            )),
        }
    }

    /// `AwaitingTrade -> AwaitingPrice`, recording the owner's side.
    pub fn record_trade(&self, user_id: &str, side: TradeSide) -> Result<Self, DomainError> {
        if user_id != self.owner_id {
            return Err(DomainError::validation(
                ValidationKind::NotSessionOwner,
                "This simulation belongs to someone else.",
            ));
        }
        if self.phase != SimPhase::AwaitingTrade {
            return Err(DomainError::validation(
                ValidationKind::WrongPhase,
                "Start the simulation before choosing to buy or sell.",
            ));
        }
        let mut next = self.clone();
        next.players.insert(user_id.to_string(), Some(side));
        next.phase = SimPhase::AwaitingPrice;
        Ok(next)
    }
}
