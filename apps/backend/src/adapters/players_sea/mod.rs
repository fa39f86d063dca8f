//! SeaORM adapter for lobby players - generic over ConnectionTrait.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::lobby_players;

pub async fn find_all_by_lobby<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    lobby_id: i64,
) -> Result<Vec<lobby_players::Model>, sea_orm::DbErr> {
    lobby_players::Entity::find()
        .filter(lobby_players::Column::LobbyId.eq(lobby_id))
        .order_by_asc(lobby_players::Column::JoinedAt)
        .order_by_asc(lobby_players::Column::UserId)
        .all(conn)
        .await
}

/// Insert the row, or update score and left_at if `(lobby_id, user_id)` exists.
pub async fn upsert_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    row: lobby_players::ActiveModel,
) -> Result<(), sea_orm::DbErr> {
    lobby_players::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                lobby_players::Column::LobbyId,
                lobby_players::Column::UserId,
            ])
            .update_columns([lobby_players::Column::Score, lobby_players::Column::LeftAt])
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
