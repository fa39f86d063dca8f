//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here; services only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

const TURN_CREATED_CONCURRENTLY: &str = "Turn record was created concurrently; please retry";
const COLOR_CLAIMED_CONCURRENTLY: &str = "Color was claimed concurrently; please retry";

/// Extract the column list from SQLite "UNIQUE constraint failed: t.a, t.b" error messages.
fn extract_sqlite_columns(error_msg: &str) -> Option<&str> {
    let prefix = error_msg.find("UNIQUE constraint failed: ")?;
    let rest = &error_msg[prefix + "UNIQUE constraint failed: ".len()..];
    rest.split(['\n', '"'])
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Map SQLite column lists to domain-specific conflict errors.
///
/// A second row for an already-taken color means another writer seated a
/// player between our read and our insert; the lobby may still have a free
/// seat, so it is reported as retryable rather than as a full lobby.
fn map_sqlite_columns_to_conflict(columns: &str) -> Option<(ConflictKind, &'static str)> {
    match columns {
        "lobby_turns.lobby_id" => Some((ConflictKind::OptimisticLock, TURN_CREATED_CONCURRENTLY)),
        "lobby_players.lobby_id, lobby_players.color" => {
            Some((ConflictKind::OptimisticLock, COLOR_CLAIMED_CONCURRENTLY))
        }
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("lobby_turns_pkey") {
        return Some((ConflictKind::OptimisticLock, TURN_CREATED_CONCURRENTLY));
    }
    if error_msg.contains("ux_lobby_players_lobby_color") {
        return Some((ConflictKind::OptimisticLock, COLOR_CLAIMED_CONCURRENTLY));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                #[derive(serde::Deserialize)]
                struct LockInfo {
                    expected: i32,
                    actual: i32,
                }

                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );

                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Turn was modified concurrently \
                             (expected version {}, actual version {}); please retry",
                            info.expected, info.actual
                        ),
                    );
                }
            }

            warn!("Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Turn was modified by another transaction; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");

        if let Some(columns) = extract_sqlite_columns(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_columns_to_conflict(columns) {
                return DomainError::conflict(kind, detail);
            }
        }

        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503")
        || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::Other("ForeignKey".into()),
            "Foreign key constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation(
            ValidationKind::Other("Check".into()),
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
