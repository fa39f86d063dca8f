use async_trait::async_trait;

use crate::domain::{BoardGrid, LobbyId, Move, UserId};
use crate::errors::domain::DomainError;

/// Move generation and board state, owned outside this crate.
///
/// Implementations report an unreachable engine as
/// `InfraErrorKind::BoardEngineUnavailable`.
#[async_trait]
pub trait BoardEngine: Send + Sync {
    /// Squares `user_id` may currently play. Empty means no legal move.
    async fn valid_moves(
        &self,
        lobby_id: LobbyId,
        user_id: UserId,
    ) -> Result<Vec<Move>, DomainError>;

    /// Current board snapshot.
    async fn board_grid(&self, lobby_id: LobbyId) -> Result<BoardGrid, DomainError>;
}
