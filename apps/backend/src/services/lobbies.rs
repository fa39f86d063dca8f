use tracing::info;

use crate::domain::LobbyId;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::Lobby;
use crate::services::GameEngine;

impl GameEngine {
    pub async fn create_lobby(&self, title: &str) -> Result<Lobby, DomainError> {
        let lobby = self.lobbies.create_lobby(title).await?;
        info!(lobby_id = lobby.id, title = %lobby.title, "lobby created");
        Ok(lobby)
    }

    pub async fn get_lobby(&self, lobby_id: LobbyId) -> Result<Lobby, DomainError> {
        self.lobbies.find_lobby(lobby_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Lobby, format!("lobby {lobby_id} not found"))
        })
    }

    /// Newest first.
    pub async fn list_lobbies(&self) -> Result<Vec<Lobby>, DomainError> {
        self.lobbies.list_lobbies().await
    }
}
