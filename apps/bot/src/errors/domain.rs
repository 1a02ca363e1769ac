//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Store,
}

/// Validation failures the user can cause with a click or a command
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    UnknownInteractionType,
    UnknownCommand,
    UnknownComponent,
    InvalidChoice,
    MissingOption,
    MissingUser,
    WrongPhase,
    NotSessionOwner,
}

impl ValidationKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationKind::UnknownInteractionType => ErrorCode::UnknownInteractionType,
            ValidationKind::UnknownCommand => ErrorCode::UnknownCommand,
            ValidationKind::UnknownComponent => ErrorCode::UnknownComponent,
            ValidationKind::InvalidChoice => ErrorCode::InvalidChoice,
            ValidationKind::MissingOption => ErrorCode::MissingOption,
            ValidationKind::MissingUser => ErrorCode::InvalidPayload,
            ValidationKind::WrongPhase => ErrorCode::WrongPhase,
            ValidationKind::NotSessionOwner => ErrorCode::NotSessionOwner,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
