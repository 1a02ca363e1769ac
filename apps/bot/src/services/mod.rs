//! Application services: session registry, interaction dispatch and the
//! follow-up sequencer.

pub mod follow_up;
pub mod interactions;
pub mod registry;
