// Unit tests for DomainError -> ErrorCode mapping
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

#[test]
fn maps_seating_and_turn_errors() {
    assert_eq!(DomainError::lobby_full(7).code(), ErrorCode::LobbyFull);
    assert_eq!(
        DomainError::players_incomplete(7, "advance_turn").code(),
        ErrorCode::PlayersIncomplete
    );
    assert_eq!(
        DomainError::conflict(ConflictKind::OutOfTurn, "not yours").code(),
        ErrorCode::OutOfTurn
    );
    assert_eq!(
        DomainError::validation(ValidationKind::NotSeated, "who?").code(),
        ErrorCode::NotSeated
    );
}

#[test]
fn maps_grid_errors() {
    assert_eq!(
        DomainError::malformed_grid("row 1 has 3 cells").code(),
        ErrorCode::MalformedGrid
    );
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Lobby, "no lobby");
    assert_eq!(nf.code().as_str(), "LOBBY_NOT_FOUND");
}

#[test]
fn transient_infra_errors_are_dependency_unavailable() {
    for kind in [
        InfraErrorKind::DbUnavailable,
        InfraErrorKind::BoardEngineUnavailable,
        InfraErrorKind::Timeout,
    ] {
        let err = DomainError::infra(kind, "down");
        assert!(err.is_dependency_unavailable());
        assert_eq!(err.code(), ErrorCode::DependencyUnavailable);
    }

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "two blacks");
    assert!(!corrupt.is_dependency_unavailable());
    assert_eq!(corrupt.code(), ErrorCode::DataCorruption);
}

#[test]
fn details_carry_lobby_and_operation() {
    let msg = DomainError::players_incomplete(42, "current_turn").to_string();
    assert!(msg.contains("42"), "got: {msg}");
    assert!(msg.contains("current_turn"), "got: {msg}");
}
