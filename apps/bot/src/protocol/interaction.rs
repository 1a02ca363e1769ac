//! Inbound interaction payloads and their classification.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::domain::{DomainError, ValidationKind};

pub const PING: u8 = 1;
pub const APPLICATION_COMMAND: u8 = 2;
pub const MESSAGE_COMPONENT: u8 = 3;

/// Raw interaction body as delivered to `POST /interactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<InteractionData>,
    /// Present in guilds.
    #[serde(default)]
    pub member: Option<Member>,
    /// Present in direct messages.
    #[serde(default)]
    pub user: Option<User>,
    /// The message a component belongs to.
    #[serde(default)]
    pub message: Option<MessageRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOption>,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub id: String,
}

impl Interaction {
    pub fn user_id(&self) -> Option<&str> {
        self.member
            .as_ref()
            .map(|m| m.user.id.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.id.as_str()))
    }
}

/// Classified interaction, the dispatcher's input.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    Handshake,
    Command(CommandInvocation),
    Component(ComponentAction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    pub interaction_id: String,
    pub user_id: String,
    pub name: String,
    pub options: Vec<(String, Value)>,
}

impl CommandInvocation {
    /// String value of the named option.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAction {
    pub interaction_id: String,
    pub user_id: String,
    /// Interaction token addressing follow-up calls.
    pub token: String,
    /// Message carrying the clicked control.
    pub message_id: Option<String>,
    pub custom_id: String,
    pub values: Vec<String>,
}

impl TryFrom<Interaction> for InteractionEvent {
    type Error = DomainError;

    fn try_from(interaction: Interaction) -> Result<Self, Self::Error> {
        match interaction.kind {
            PING => Ok(InteractionEvent::Handshake),
            APPLICATION_COMMAND => {
                let user_id = require_user(&interaction)?;
                let data = interaction.data.unwrap_or_default();
                Ok(InteractionEvent::Command(CommandInvocation {
                    interaction_id: interaction.id,
                    user_id,
                    name: data.name.unwrap_or_default(),
                    options: data.options.into_iter().map(|o| (o.name, o.value)).collect(),
                }))
            }
            MESSAGE_COMPONENT => {
                let user_id = require_user(&interaction)?;
                let data = interaction.data.unwrap_or_default();
                Ok(InteractionEvent::Component(ComponentAction {
                    interaction_id: interaction.id,
                    user_id,
                    token: interaction.token,
                    message_id: interaction.message.map(|m| m.id),
                    custom_id: data.custom_id.unwrap_or_default(),
                    values: data.values,
                }))
            }
            other => Err(DomainError::validation(
                ValidationKind::UnknownInteractionType,
                format!("Interaction type {other} is not handled"),
            )),
        }
    }
}

fn require_user(interaction: &Interaction) -> Result<String, DomainError> {
    interaction.user_id().map(str::to_string).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::MissingUser,
            format!("Interaction {} has no invoking user", interaction.id),
        )
    })
}
