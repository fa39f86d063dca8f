use thiserror::Error;

use crate::errors::domain::DomainError;

/// Top-level error for setup and host code (configuration, bootstrap).
///
/// Engine operations return `DomainError`; it converts into `AppError` so a
/// host binary can use a single error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}
