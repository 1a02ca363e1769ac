//! Outbound response shapes: the synchronous ack and message bodies.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::{ChoiceOption, ComponentId};

const PONG: u8 = 1;
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
const DEFERRED_UPDATE_MESSAGE: u8 = 6;

/// Only the invoking user sees the message.
pub const EPHEMERAL: u64 = 1 << 6;

const ACTION_ROW: u8 = 1;
const BUTTON: u8 = 2;
const STRING_SELECT: u8 = 3;

/// Synchronous acknowledgement returned as the HTTP response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Ack {
    Pong,
    Message(MessageData),
    /// Acknowledge a component without changing anything.
    DeferredUpdate,
}

impl Ack {
    pub fn message(data: MessageData) -> Self {
        Ack::Message(data)
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Ack::Message(MessageData::text(content).ephemeral())
    }

    fn response_type(&self) -> u8 {
        match self {
            Ack::Pong => PONG,
            Ack::Message(_) => CHANNEL_MESSAGE_WITH_SOURCE,
            Ack::DeferredUpdate => DEFERRED_UPDATE_MESSAGE,
        }
    }

    pub fn data(&self) -> Option<&MessageData> {
        match self {
            Ack::Message(data) => Some(data),
            Ack::Pong | Ack::DeferredUpdate => None,
        }
    }
}

impl Serialize for Ack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.data();
        let mut state = serializer.serialize_struct("Ack", if data.is_some() { 2 } else { 1 })?;
        state.serialize_field("type", &self.response_type())?;
        if let Some(data) = data {
            state.serialize_field("data", data)?;
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub content: String,
    /// `Some(vec![])` clears existing components on an edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ActionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl MessageData {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            components: None,
            flags: None,
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or(0) | EPHEMERAL);
        self
    }

    pub fn with_row(mut self, row: ActionRow) -> Self {
        self.components.get_or_insert_with(Vec::new).push(row);
        self
    }

    pub fn without_components(mut self) -> Self {
        self.components = Some(Vec::new());
        self
    }

    pub fn is_ephemeral(&self) -> bool {
        self.flags.is_some_and(|f| f & EPHEMERAL != 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionRow {
    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn of(components: Vec<Component>) -> Self {
        Self { components }
    }
}

impl Serialize for ActionRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActionRow", 2)?;
        state.serialize_field("type", &ACTION_ROW)?;
        state.serialize_field("components", &self.components)?;
        state.end()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
    Success = 3,
    Danger = 4,
}

impl Serialize for ButtonStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Button {
        style: ButtonStyle,
        label: String,
        custom_id: ComponentId,
    },
    StringSelect {
        custom_id: ComponentId,
        options: Vec<SelectOption>,
    },
}

impl Component {
    pub fn button(style: ButtonStyle, label: impl Into<String>, custom_id: ComponentId) -> Self {
        Component::Button {
            style,
            label: label.into(),
            custom_id,
        }
    }

    pub fn select(custom_id: ComponentId, options: Vec<SelectOption>) -> Self {
        Component::StringSelect { custom_id, options }
    }

    pub fn custom_id(&self) -> &ComponentId {
        match self {
            Component::Button { custom_id, .. } | Component::StringSelect { custom_id, .. } => {
                custom_id
            }
        }
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Component::Button {
                style,
                label,
                custom_id,
            } => {
                let mut state = serializer.serialize_struct("Button", 4)?;
                state.serialize_field("type", &BUTTON)?;
                state.serialize_field("style", style)?;
                state.serialize_field("label", label)?;
                state.serialize_field("custom_id", &custom_id.encode())?;
                state.end()
            }
            Component::StringSelect { custom_id, options } => {
                let mut state = serializer.serialize_struct("StringSelect", 3)?;
                state.serialize_field("type", &STRING_SELECT)?;
                state.serialize_field("custom_id", &custom_id.encode())?;
                state.serialize_field("options", options)?;
                state.end()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl From<ChoiceOption> for SelectOption {
    fn from(option: ChoiceOption) -> Self {
        Self {
            label: option.label.to_string(),
            value: option.value.to_string(),
            description: option.description.to_string(),
        }
    }
}
