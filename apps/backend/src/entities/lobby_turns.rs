use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lobby_turns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "lobby_id")]
    pub lobby_id: i64,
    #[sea_orm(column_name = "current_user_id")]
    pub current_user_id: i64,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lobbies::Entity",
        from = "Column::LobbyId",
        to = "super::lobbies::Column::Id"
    )]
    Lobby,
}

impl Related<super::lobbies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lobby.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
