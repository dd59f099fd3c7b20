//! Domain-level error type used across services, repos and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! The kind enums are deliberately closed (no `Other` catch-all): every
//! rejection a service can produce is named here, and the transport
//! mapping in `error.rs` is exhaustive over them.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rejected request or business rule violation; retrying unchanged input
/// will fail again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    PlayerInAnotherRoom,
    TitleRequired,
    TitleTooLong,
    DescriptionTooLong,
    RoomFull,
    AlreadyHost,
    AlreadyGuest,
    NotInRoom,
    GameInProgress,
    GameCompleted,
    OutOfTurn,
    InvalidPosition,
    PositionOccupied,
}

/// Domain-level not found entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Player,
    Room,
    Game,
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfraErrorKind {
    /// Store failure; the surrounding transaction has been rolled back
    Db,
    /// Persisted state that cannot be decoded (bad board, unknown mark)
    DataCorruption,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Caller is authenticated but not allowed to see this resource
    Forbidden(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Forbidden(d) => write!(f, "forbidden: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
