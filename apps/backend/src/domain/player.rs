use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::color::Color;
use crate::domain::{LobbyId, UserId};

/// Discs each side owns on the standard opening board.
pub const INITIAL_SCORE: u32 = 2;

/// A user seated in a lobby. `(lobby_id, user_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub lobby_id: LobbyId,
    pub user_id: UserId,
    /// Fixed at join time.
    pub color: Color,
    pub joined_at: OffsetDateTime,
    pub left_at: Option<OffsetDateTime>,
    pub score: u32,
}

impl Player {
    pub fn joined(lobby_id: LobbyId, user_id: UserId, color: Color, now: OffsetDateTime) -> Self {
        Self {
            lobby_id,
            user_id,
            color,
            joined_at: now,
            left_at: None,
            score: INITIAL_SCORE,
        }
    }

    pub fn with_score(&self, score: u32) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }
}
