use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::LobbyId;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lobby {
    pub id: LobbyId,
    pub title: String,
    pub created_at: OffsetDateTime,
}

#[async_trait]
pub trait LobbyStore: Send + Sync {
    async fn create_lobby(&self, title: &str) -> Result<Lobby, DomainError>;

    async fn find_lobby(&self, lobby_id: LobbyId) -> Result<Option<Lobby>, DomainError>;

    /// Newest first.
    async fn list_lobbies(&self) -> Result<Vec<Lobby>, DomainError>;
}
