//! Error codes for the duel bot.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request authentication
    /// Signature or timestamp header missing
    MissingSignature,
    /// Signature does not verify against the application key
    InvalidSignature,

    // Request validation
    /// Body is not a valid interaction payload
    InvalidPayload,
    /// Interaction type the bot does not handle
    UnknownInteractionType,
    /// Slash command name the bot does not know
    UnknownCommand,
    /// Control identifier that does not decode
    UnknownComponent,
    /// Option value outside the choice set
    InvalidChoice,
    /// Required command option missing
    MissingOption,
    /// Session exists but is in the wrong phase for the action
    WrongPhase,
    /// Action on a session owned by another user
    NotSessionOwner,

    // System
    /// Outbound platform call failed
    UpstreamError,
    /// Session store failure
    StoreError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingSignature => "MISSING_SIGNATURE",
            Self::InvalidSignature => "INVALID_SIGNATURE",

            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::UnknownInteractionType => "UNKNOWN_INTERACTION_TYPE",
            Self::UnknownCommand => "UNKNOWN_COMMAND",
            Self::UnknownComponent => "UNKNOWN_COMPONENT",
            Self::InvalidChoice => "INVALID_CHOICE",
            Self::MissingOption => "MISSING_OPTION",
            Self::WrongPhase => "WRONG_PHASE",
            Self::NotSessionOwner => "NOT_SESSION_OWNER",

            Self::UpstreamError => "UPSTREAM_ERROR",
            Self::StoreError => "STORE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
