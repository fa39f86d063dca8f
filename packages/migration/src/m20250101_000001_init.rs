use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Lobbies {
    Table,
    Id,
    Title,
    CreatedAt,
}

#[derive(Iden)]
enum LobbyPlayers {
    Table,
    LobbyId,
    UserId,
    Color,
    JoinedAt,
    LeftAt,
    Score,
}

#[derive(Iden)]
enum LobbyTurns {
    Table,
    LobbyId,
    CurrentUserId,
    LockVersion,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // lobbies
        manager
            .create_table(
                Table::create()
                    .table(Lobbies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lobbies::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Lobbies::Title).string().not_null())
                    .col(
                        ColumnDef::new(Lobbies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // lobby_players: one row per (lobby, user); color is fixed at join time
        manager
            .create_table(
                Table::create()
                    .table(LobbyPlayers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LobbyPlayers::LobbyId).big_integer().not_null())
                    .col(ColumnDef::new(LobbyPlayers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(LobbyPlayers::Color).string_len(5).not_null())
                    .col(
                        ColumnDef::new(LobbyPlayers::JoinedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LobbyPlayers::LeftAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LobbyPlayers::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(
                        Index::create()
                            .col(LobbyPlayers::LobbyId)
                            .col(LobbyPlayers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lobby_players_lobby_id")
                            .from(LobbyPlayers::Table, LobbyPlayers::LobbyId)
                            .to(Lobbies::Table, Lobbies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // a lobby never seats two players of the same color
        manager
            .create_index(
                Index::create()
                    .name("ux_lobby_players_lobby_color")
                    .table(LobbyPlayers::Table)
                    .col(LobbyPlayers::LobbyId)
                    .col(LobbyPlayers::Color)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // lobby_turns: absent row means no turn has been assigned yet
        manager
            .create_table(
                Table::create()
                    .table(LobbyTurns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LobbyTurns::LobbyId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LobbyTurns::CurrentUserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LobbyTurns::LockVersion)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(LobbyTurns::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lobby_turns_lobby_id")
                            .from(LobbyTurns::Table, LobbyTurns::LobbyId)
                            .to(Lobbies::Table, Lobbies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_table(Table::drop().table(LobbyTurns::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_lobby_players_lobby_color")
                    .table(LobbyPlayers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LobbyPlayers::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Lobbies::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
