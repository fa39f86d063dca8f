//! SeaORM adapter for lobbies - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::lobbies;

pub async fn create_lobby<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<lobbies::Model, sea_orm::DbErr> {
    let lobby = lobbies::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    lobby.insert(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    lobby_id: i64,
) -> Result<Option<lobbies::Model>, sea_orm::DbErr> {
    lobbies::Entity::find_by_id(lobby_id).one(conn).await
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<lobbies::Model>, sea_orm::DbErr> {
    lobbies::Entity::find()
        .order_by_desc(lobbies::Column::CreatedAt)
        .order_by_desc(lobbies::Column::Id)
        .all(conn)
        .await
}
