use async_trait::async_trait;

use crate::domain::{LobbyId, Player};
use crate::errors::domain::DomainError;

/// Player rows keyed by `(lobby_id, user_id)`.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// All players of a lobby in join order.
    async fn load_players(&self, lobby_id: LobbyId) -> Result<Vec<Player>, DomainError>;

    /// Insert a new player, or update the mutable fields (score, left_at)
    /// of an existing one. Color and join time never change.
    async fn save_player(&self, player: &Player) -> Result<(), DomainError>;

    /// Save several players atomically: either every row is written or none.
    async fn save_players(&self, players: &[Player]) -> Result<(), DomainError>;
}
