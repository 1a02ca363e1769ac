//! Slash command catalogue installed with `register-commands`.

use serde::Serialize;

use crate::domain::Choice;

pub const TEST_COMMAND: &str = "test";
pub const SIM_COMMAND: &str = "sim";
pub const OBJECT_OPTION: &str = "object";

const CHAT_INPUT: u8 = 1;
const STRING_OPTION: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub choices: Vec<OptionChoiceDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChoiceDefinition {
    pub name: &'static str,
    pub value: &'static str,
}

pub fn catalogue() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: TEST_COMMAND,
            description: "Start a stock simulation",
            kind: CHAT_INPUT,
            options: Vec::new(),
        },
        CommandDefinition {
            name: SIM_COMMAND,
            description: "Challenge to a match of rock paper scissors",
            kind: CHAT_INPUT,
            options: vec![OptionDefinition {
                kind: STRING_OPTION,
                name: OBJECT_OPTION,
                description: "Pick your object",
                required: true,
                choices: Choice::ALL
                    .into_iter()
                    .map(|c| OptionChoiceDefinition {
                        name: c.label(),
                        value: c.value(),
                    })
                    .collect(),
            }],
        },
    ]
}
