//! Scriptable board engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reversi_backend::domain::{BoardGrid, LobbyId, Move, UserId};
use reversi_backend::errors::domain::{DomainError, InfraErrorKind};
use reversi_backend::repos::BoardEngine;

/// Users without scripted moves have one legal move.
#[derive(Default)]
pub struct FakeBoard {
    moves: Mutex<HashMap<UserId, Vec<Move>>>,
    grid: Mutex<BoardGrid>,
    unavailable: AtomicBool,
    valid_moves_calls: AtomicUsize,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_moves(&self, user_id: UserId, moves: Vec<Move>) {
        self.moves.lock().unwrap().insert(user_id, moves);
    }

    pub fn set_no_moves(&self, user_id: UserId) {
        self.set_moves(user_id, Vec::new());
    }

    pub fn set_grid(&self, grid: BoardGrid) {
        *self.grid.lock().unwrap() = grid;
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn valid_moves_calls(&self) -> usize {
        self.valid_moves_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self, lobby_id: LobbyId) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::infra(
                InfraErrorKind::BoardEngineUnavailable,
                format!("board engine unreachable for lobby {lobby_id}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl BoardEngine for FakeBoard {
    async fn valid_moves(
        &self,
        lobby_id: LobbyId,
        user_id: UserId,
    ) -> Result<Vec<Move>, DomainError> {
        self.valid_moves_calls.fetch_add(1, Ordering::SeqCst);
        // Give racing callers a chance to interleave.
        tokio::task::yield_now().await;
        self.check_available(lobby_id)?;

        let moves = self.moves.lock().unwrap();
        Ok(moves
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| vec![Move { row: 2, col: 3 }]))
    }

    async fn board_grid(&self, lobby_id: LobbyId) -> Result<BoardGrid, DomainError> {
        self.check_available(lobby_id)?;
        Ok(self.grid.lock().unwrap().clone())
    }
}
