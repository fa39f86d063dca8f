//! SeaORM adapter for lobby turn records - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::lobby_turns;

pub async fn find_by_lobby<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    lobby_id: i64,
) -> Result<Option<lobby_turns::Model>, sea_orm::DbErr> {
    lobby_turns::Entity::find_by_id(lobby_id).one(conn).await
}

/// Create the first turn record of a lobby at version 1.
///
/// A concurrent insert for the same lobby fails on the primary key; the
/// error mapper turns that into an optimistic lock conflict.
pub async fn insert_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    lobby_id: i64,
    current_user_id: i64,
) -> Result<lobby_turns::Model, sea_orm::DbErr> {
    let turn = lobby_turns::ActiveModel {
        lobby_id: Set(lobby_id),
        current_user_id: Set(current_user_id),
        lock_version: Set(1),
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    turn.insert(conn).await
}

/// Move the turn if the stored lock_version still matches, then refetch.
///
/// Distinguishes a missing record (`RecordNotFound`) from a stale version
/// (`OPTIMISTIC_LOCK:` payload) when no row was updated.
pub async fn update_turn<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    lobby_id: i64,
    current_user_id: i64,
    expected_lock_version: i32,
) -> Result<lobby_turns::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = lobby_turns::Entity::update_many()
        .col_expr(lobby_turns::Column::CurrentUserId, Expr::value(current_user_id))
        .col_expr(lobby_turns::Column::UpdatedAt, Expr::value(now))
        .col_expr(
            lobby_turns::Column::LockVersion,
            Expr::col(lobby_turns::Column::LockVersion).add(1),
        )
        .filter(lobby_turns::Column::LobbyId.eq(lobby_id))
        .filter(lobby_turns::Column::LockVersion.eq(expected_lock_version))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        let existing = find_by_lobby(conn, lobby_id).await?;
        return match existing {
            Some(turn) => Err(sea_orm::DbErr::Custom(format!(
                "OPTIMISTIC_LOCK:{{\"expected\":{},\"actual\":{}}}",
                expected_lock_version, turn.lock_version
            ))),
            None => Err(sea_orm::DbErr::RecordNotFound(format!(
                "Turn record for lobby {lobby_id} not found"
            ))),
        };
    }

    find_by_lobby(conn, lobby_id).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound(format!("Turn record for lobby {lobby_id} not found"))
    })
}
