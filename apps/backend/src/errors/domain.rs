//! Domain-level error type used across services and adapters.
//!
//! This error type is transport- and DB-agnostic. Adapters translate
//! `sea_orm::DbErr` into it (see `infra::db_errors`); callers map it onto
//! their own response shapes through [`DomainError::code`].

use thiserror::Error;

use crate::errors::ErrorCode;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    BoardEngineUnavailable,
    DataCorruption,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Lobby,
    Player,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Both colors are already seated.
    LobbyFull,
    /// The caller does not hold the turn.
    OutOfTurn,
    OptimisticLock,
    Other(String),
}

/// Validation and precondition kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Turn operations need both colors seated.
    PlayersIncomplete,
    /// Board grid is not rectangular or carries unknown cell codes.
    MalformedGrid,
    /// The user is not one of the lobby's seated players.
    NotSeated,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or unmet precondition
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn lobby_full(lobby_id: i64) -> Self {
        Self::conflict(
            ConflictKind::LobbyFull,
            format!("lobby {lobby_id} already seats two players"),
        )
    }

    pub fn players_incomplete(lobby_id: i64, op: &str) -> Self {
        Self::validation(
            ValidationKind::PlayersIncomplete,
            format!("{op}: lobby {lobby_id} does not have both colors seated"),
        )
    }

    pub fn malformed_grid(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::MalformedGrid, detail)
    }

    /// Transient collaborator failure (storage or board engine).
    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Infra(
                InfraErrorKind::DbUnavailable
                    | InfraErrorKind::BoardEngineUnavailable
                    | InfraErrorKind::Timeout,
                _
            )
        )
    }

    /// Stable code for logs and transport mapping.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(kind, _) => match kind {
                ValidationKind::PlayersIncomplete => ErrorCode::PlayersIncomplete,
                ValidationKind::MalformedGrid => ErrorCode::MalformedGrid,
                ValidationKind::NotSeated => ErrorCode::NotSeated,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            Self::Conflict(kind, _) => match kind {
                ConflictKind::LobbyFull => ErrorCode::LobbyFull,
                ConflictKind::OutOfTurn => ErrorCode::OutOfTurn,
                ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            Self::NotFound(kind, _) => match kind {
                NotFoundKind::Lobby => ErrorCode::LobbyNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            Self::Infra(kind, _) => match kind {
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
                _ => ErrorCode::DependencyUnavailable,
            },
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
