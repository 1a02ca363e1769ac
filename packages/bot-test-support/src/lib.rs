//! Test support utilities for the duel bot.
//!
//! Shared by the bot's integration tests: idempotent logging
//! initialization, problem-details assertions, and request signing for
//! the interactions endpoint.

pub mod logging;
pub mod problem_details;
pub mod signing;
