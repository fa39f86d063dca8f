//! Game engine services: seating, turn control and scoring on top of the
//! storage and board-engine ports.

pub mod lobbies;
pub mod lobby_locks;
pub mod scoring;
pub mod seating;
pub mod turns;

use std::sync::Arc;

use crate::adapters::SeaStore;
use crate::domain::{ColorAssignment, LobbyId, Player, Seats};
use crate::errors::domain::DomainError;
use crate::repos::{BoardEngine, LobbyStore, PlayerStore, TurnStore};

pub use lobby_locks::{LobbyGuard, LobbyLocks};

/// Entry point for every lobby operation.
///
/// Mutating operations on one lobby run under that lobby's lock; the turn
/// record's version guards against writers in other processes.
#[derive(Clone)]
pub struct GameEngine {
    players: Arc<dyn PlayerStore>,
    turns: Arc<dyn TurnStore>,
    lobbies: Arc<dyn LobbyStore>,
    board: Arc<dyn BoardEngine>,
    locks: LobbyLocks,
}

impl GameEngine {
    pub fn new(
        players: Arc<dyn PlayerStore>,
        turns: Arc<dyn TurnStore>,
        lobbies: Arc<dyn LobbyStore>,
        board: Arc<dyn BoardEngine>,
    ) -> Self {
        Self {
            players,
            turns,
            lobbies,
            board,
            locks: LobbyLocks::new(),
        }
    }

    /// Engine backed by one SeaORM store for every storage port.
    pub fn with_store(store: SeaStore, board: Arc<dyn BoardEngine>) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store, board)
    }

    /// Current color view of a lobby.
    async fn assignment(&self, lobby_id: LobbyId) -> Result<ColorAssignment, DomainError> {
        let players: Vec<Player> = self.players.load_players(lobby_id).await?;
        ColorAssignment::from_players(lobby_id, &players)
    }

    /// Both seats, or `PlayersIncomplete` naming `op`.
    async fn require_seats(&self, lobby_id: LobbyId, op: &str) -> Result<Seats, DomainError> {
        self.assignment(lobby_id)
            .await?
            .seats()
            .ok_or_else(|| DomainError::players_incomplete(lobby_id, op))
    }
}
