//! Adapters for external dependencies.

pub mod discord_rest;

pub use discord_rest::DiscordClient;
