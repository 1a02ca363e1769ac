//! Domain layer: pure game logic types and helpers.

pub mod choices;
pub mod component_id;
pub mod session;
pub mod shuffler;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_outcome;

// Re-exports for ergonomics
pub use choices::{resolve, Choice, ChoiceOption, Outcome};
pub use component_id::ComponentId;
pub use session::{
    ChallengeResult, ChallengeSession, GameSession, SessionKey, SimPhase, SimulationSession,
    TradeSide,
};
pub use shuffler::{random_emoji, shuffled_options, FixedOrder, RandomShuffler, Shuffler};
