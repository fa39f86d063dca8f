use tracing::{debug, info};

use crate::domain::{
    decide_next_turn, opponent_for_move, resolve_turn_holder, LobbyId, TurnAdvance, TurnState,
    UserId,
};
use crate::errors::domain::DomainError;
use crate::services::GameEngine;

impl GameEngine {
    /// Holder of the turn. The first query on a full lobby records Black as holder.
    pub async fn current_turn(&self, lobby_id: LobbyId) -> Result<UserId, DomainError> {
        let _guard = self.locks.lock(lobby_id).await;

        let seats = self.require_seats(lobby_id, "current_turn").await?;
        let stored = self.turns.load_turn(lobby_id).await?;
        let state = TurnState::from_stored(stored.map(|r| r.current_turn_user_id));
        let holder = resolve_turn_holder(lobby_id, &seats, state)?;

        if stored.is_none() {
            self.turns.save_turn(lobby_id, holder, None).await?;
            info!(lobby_id, next = holder, "first turn assigned");
        }

        Ok(holder)
    }

    /// End `current_turn_user_id`'s turn and return who moves next.
    pub async fn advance_turn(
        &self,
        lobby_id: LobbyId,
        current_turn_user_id: UserId,
    ) -> Result<UserId, DomainError> {
        let advance = self
            .advance_turn_detailed(lobby_id, current_turn_user_id)
            .await?;
        Ok(advance.next)
    }

    /// Like [`GameEngine::advance_turn`], also reporting whether the opponent was skipped.
    pub async fn advance_turn_detailed(
        &self,
        lobby_id: LobbyId,
        current_turn_user_id: UserId,
    ) -> Result<TurnAdvance, DomainError> {
        let _guard = self.locks.lock(lobby_id).await;

        let seats = self.require_seats(lobby_id, "advance_turn").await?;
        let stored = self.turns.load_turn(lobby_id).await?;
        let state = TurnState::from_stored(stored.map(|r| r.current_turn_user_id));
        let holder = resolve_turn_holder(lobby_id, &seats, state)?;
        let opponent = opponent_for_move(lobby_id, &seats, holder, current_turn_user_id)?;

        let opponent_moves = self.board.valid_moves(lobby_id, opponent).await?;
        let advance = decide_next_turn(current_turn_user_id, opponent, !opponent_moves.is_empty());

        let record = self
            .turns
            .save_turn(lobby_id, advance.next, stored.map(|r| r.version))
            .await?;

        if advance.passed {
            debug!(lobby_id, user_id = opponent, "opponent has no legal move");
        }
        info!(
            lobby_id,
            user_id = current_turn_user_id,
            next = advance.next,
            passed = advance.passed,
            version = record.version,
            "turn advanced"
        );
        Ok(advance)
    }
}
