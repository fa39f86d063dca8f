//! SeaORM implementation of the storage ports.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, Set};

use crate::adapters::{lobbies_sea, players_sea, turns_sea};
use crate::db::txn::with_txn;
use crate::domain::{Color, LobbyId, Player, UserId};
use crate::entities::lobby_players::PlayerColor;
use crate::entities::{lobbies, lobby_players, lobby_turns};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::{Lobby, LobbyStore, PlayerStore, TurnRecord, TurnStore};

/// Storage ports backed by a SeaORM connection pool.
#[derive(Debug, Clone)]
pub struct SeaStore {
    db: DatabaseConnection,
}

impl SeaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl PlayerStore for SeaStore {
    async fn load_players(&self, lobby_id: LobbyId) -> Result<Vec<Player>, DomainError> {
        let rows = players_sea::find_all_by_lobby(&self.db, lobby_id).await?;
        rows.into_iter().map(Player::try_from).collect()
    }

    async fn save_player(&self, player: &Player) -> Result<(), DomainError> {
        let row = active_player(player)?;
        players_sea::upsert_player(&self.db, row).await?;
        Ok(())
    }

    async fn save_players(&self, players: &[Player]) -> Result<(), DomainError> {
        let rows = players
            .iter()
            .map(active_player)
            .collect::<Result<Vec<_>, _>>()?;

        with_txn(&self.db, |txn| {
            Box::pin(async move {
                for row in rows {
                    players_sea::upsert_player(txn, row).await?;
                }
                Ok(())
            })
        })
        .await
    }
}

#[async_trait]
impl TurnStore for SeaStore {
    async fn load_turn(&self, lobby_id: LobbyId) -> Result<Option<TurnRecord>, DomainError> {
        let turn = turns_sea::find_by_lobby(&self.db, lobby_id).await?;
        Ok(turn.map(TurnRecord::from))
    }

    async fn save_turn(
        &self,
        lobby_id: LobbyId,
        current_turn_user_id: UserId,
        expected_version: Option<i32>,
    ) -> Result<TurnRecord, DomainError> {
        let turn = match expected_version {
            None => turns_sea::insert_turn(&self.db, lobby_id, current_turn_user_id).await?,
            Some(version) => {
                turns_sea::update_turn(&self.db, lobby_id, current_turn_user_id, version).await?
            }
        };
        Ok(TurnRecord::from(turn))
    }
}

#[async_trait]
impl LobbyStore for SeaStore {
    async fn create_lobby(&self, title: &str) -> Result<Lobby, DomainError> {
        let lobby = lobbies_sea::create_lobby(&self.db, title).await?;
        Ok(Lobby::from(lobby))
    }

    async fn find_lobby(&self, lobby_id: LobbyId) -> Result<Option<Lobby>, DomainError> {
        let lobby = lobbies_sea::find_by_id(&self.db, lobby_id).await?;
        Ok(lobby.map(Lobby::from))
    }

    async fn list_lobbies(&self) -> Result<Vec<Lobby>, DomainError> {
        let lobbies = lobbies_sea::list_all(&self.db).await?;
        Ok(lobbies.into_iter().map(Lobby::from).collect())
    }
}

// Conversions between SeaORM models and domain models

impl From<PlayerColor> for Color {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Black => Color::Black,
            PlayerColor::White => Color::White,
        }
    }
}

impl From<Color> for PlayerColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => PlayerColor::Black,
            Color::White => PlayerColor::White,
        }
    }
}

impl TryFrom<lobby_players::Model> for Player {
    type Error = DomainError;

    fn try_from(model: lobby_players::Model) -> Result<Self, Self::Error> {
        let score = u32::try_from(model.score).map_err(|_| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!(
                    "lobby {}: user {} has negative score {}",
                    model.lobby_id, model.user_id, model.score
                ),
            )
        })?;

        Ok(Self {
            lobby_id: model.lobby_id,
            user_id: model.user_id,
            color: model.color.into(),
            joined_at: model.joined_at,
            left_at: model.left_at,
            score,
        })
    }
}

fn active_player(player: &Player) -> Result<lobby_players::ActiveModel, DomainError> {
    let score = i32::try_from(player.score).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::Other("score overflow".into()),
            format!("score {} does not fit the score column", player.score),
        )
    })?;

    Ok(lobby_players::ActiveModel {
        lobby_id: Set(player.lobby_id),
        user_id: Set(player.user_id),
        color: Set(player.color.into()),
        joined_at: Set(player.joined_at),
        left_at: Set(player.left_at),
        score: Set(score),
    })
}

impl From<lobby_turns::Model> for TurnRecord {
    fn from(model: lobby_turns::Model) -> Self {
        Self {
            lobby_id: model.lobby_id,
            current_turn_user_id: model.current_user_id,
            version: model.lock_version,
        }
    }
}

impl From<lobbies::Model> for Lobby {
    fn from(model: lobbies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            created_at: model.created_at,
        }
    }
}
