use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;

/// Connect to the configured database without touching the schema.
pub async fn connect_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, kind)?;

    let mut opts = ConnectOptions::new(database_url);
    match kind {
        // Every new in-memory connection is a separate empty database.
        DbKind::SqliteMemory => {
            opts.min_connections(1).max_connections(1);
        }
        DbKind::SqliteFile => {
            opts.max_connections(1);
        }
        DbKind::Postgres => {
            opts.max_connections(10);
        }
    }
    opts.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    profile: DbProfile,
    kind: DbKind,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, kind).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(?profile, ?kind, "database ready");
    Ok(conn)
}
