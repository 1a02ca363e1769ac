//! Wire shapes exchanged with the chat platform.

pub mod commands;
pub mod interaction;
pub mod response;

pub use interaction::{ComponentAction, CommandInvocation, Interaction, InteractionEvent};
pub use response::{Ack, ActionRow, ButtonStyle, Component, MessageData, SelectOption};
