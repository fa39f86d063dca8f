use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stored color; mirrors `domain::Color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum PlayerColor {
    #[sea_orm(string_value = "black")]
    Black,
    #[sea_orm(string_value = "white")]
    White,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lobby_players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "lobby_id")]
    pub lobby_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "user_id")]
    pub user_id: i64,
    pub color: PlayerColor,
    #[sea_orm(column_name = "joined_at")]
    pub joined_at: OffsetDateTime,
    #[sea_orm(column_name = "left_at")]
    pub left_at: Option<OffsetDateTime>,
    pub score: i32,
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
