//! Control identifiers carried in buttons and selects.
//!
//! Identifiers are decoded once into a [`ComponentId`]. Keyed kinds are a
//! prefix plus a non-empty session key; `start_sim` carries no key and only
//! matches exactly.

use std::fmt;
use std::str::FromStr;

use super::session::SessionKey;
use crate::errors::domain::{DomainError, ValidationKind};

pub const ACCEPT_PREFIX: &str = "accept_button_";
pub const SELECT_PREFIX: &str = "select_choice_";
pub const BUY_PREFIX: &str = "buy_";
pub const SELL_PREFIX: &str = "sell_";
pub const START_SIM: &str = "start_sim";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentId {
    AcceptChallenge(SessionKey),
    SelectChoice(SessionKey),
    StartSimulation,
    Buy(SessionKey),
    Sell(SessionKey),
}

type Keyed = fn(SessionKey) -> ComponentId;

/// Longest prefix first, so a more specific prefix always wins.
const KEYED: [(&str, Keyed); 4] = [
    (ACCEPT_PREFIX, ComponentId::AcceptChallenge),
    (SELECT_PREFIX, ComponentId::SelectChoice),
    (SELL_PREFIX, ComponentId::Sell),
    (BUY_PREFIX, ComponentId::Buy),
];

impl ComponentId {
    pub fn encode(&self) -> String {
        match self {
            ComponentId::AcceptChallenge(key) => format!("{ACCEPT_PREFIX}{key}"),
            ComponentId::SelectChoice(key) => format!("{SELECT_PREFIX}{key}"),
            ComponentId::StartSimulation => START_SIM.to_string(),
            ComponentId::Buy(key) => format!("{BUY_PREFIX}{key}"),
            ComponentId::Sell(key) => format!("{SELL_PREFIX}{key}"),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ComponentId::AcceptChallenge(_) => "accept_challenge",
            ComponentId::SelectChoice(_) => "select_choice",
            ComponentId::StartSimulation => "start_simulation",
            ComponentId::Buy(_) => "buy",
            ComponentId::Sell(_) => "sell",
        }
    }

    pub fn session_key(&self) -> Option<&SessionKey> {
        match self {
            ComponentId::AcceptChallenge(key)
            | ComponentId::SelectChoice(key)
            | ComponentId::Buy(key)
            | ComponentId::Sell(key) => Some(key),
            ComponentId::StartSimulation => None,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for ComponentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == START_SIM {
            return Ok(ComponentId::StartSimulation);
        }
        KEYED
            .iter()
            .find_map(|(prefix, build)| {
                s.strip_prefix(prefix)
                    .filter(|key| !key.is_empty())
                    .map(|key| build(SessionKey::new(key)))
            })
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::UnknownComponent,
                    format!("Unrecognized control '{s}'."),
                )
            })
    }
}
