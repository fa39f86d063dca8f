use time::OffsetDateTime;
use tracing::{debug, info};

use crate::domain::{color_for_seat_count, Color, LobbyId, Player, UserId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::services::GameEngine;

impl GameEngine {
    /// Color `user_id` holds or would get on joining `lobby_id`. Does not persist.
    pub async fn assign_color(
        &self,
        lobby_id: LobbyId,
        user_id: UserId,
    ) -> Result<Color, DomainError> {
        let assignment = self.assignment(lobby_id).await?;
        if let Some(existing) = assignment.find(user_id) {
            return Ok(existing.color);
        }
        color_for_seat_count(lobby_id, assignment.seated_count())
    }

    /// Seat `user_id` in `lobby_id` with the next free color.
    ///
    /// Joining twice returns the existing player unchanged. If another
    /// process claims the same color first, the seats are read once more and
    /// the join is retried with whatever color is left.
    pub async fn join_lobby(
        &self,
        lobby_id: LobbyId,
        user_id: UserId,
    ) -> Result<Player, DomainError> {
        let _guard = self.locks.lock(lobby_id).await;

        // Fails with NotFound(Lobby) before anything is written.
        self.get_lobby(lobby_id).await?;

        match self.seat_player(lobby_id, user_id).await {
            Err(DomainError::Conflict(ConflictKind::OptimisticLock, detail)) => {
                debug!(lobby_id, user_id, %detail, "color claimed concurrently; re-reading seats");
                self.seat_player(lobby_id, user_id).await
            }
            other => other,
        }
    }

    async fn seat_player(&self, lobby_id: LobbyId, user_id: UserId) -> Result<Player, DomainError> {
        let assignment = self.assignment(lobby_id).await?;
        if let Some(existing) = assignment.find(user_id) {
            debug!(lobby_id, user_id, color = existing.color.as_str(), "user already seated");
            return Ok(existing.clone());
        }

        let color = color_for_seat_count(lobby_id, assignment.seated_count())?;
        let player = Player::joined(lobby_id, user_id, color, OffsetDateTime::now_utc());
        self.players.save_player(&player).await?;

        info!(lobby_id, user_id, color = color.as_str(), "player joined lobby");
        Ok(player)
    }

    /// Players of `lobby_id` in join order.
    pub async fn list_players(&self, lobby_id: LobbyId) -> Result<Vec<Player>, DomainError> {
        self.players.load_players(lobby_id).await
    }

    /// The seated player `user_id` of `lobby_id`.
    pub async fn get_player(
        &self,
        lobby_id: LobbyId,
        user_id: UserId,
    ) -> Result<Player, DomainError> {
        let assignment = self.assignment(lobby_id).await?;
        assignment.find(user_id).cloned().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("get_player: user {user_id} is not a player in lobby {lobby_id}"),
            )
        })
    }
}
