use tracing::{debug, info};

use crate::domain::{scoring, Color, LobbyId, ScorePair};
use crate::errors::domain::DomainError;
use crate::services::GameEngine;

impl GameEngine {
    /// Count discs on the current board and store them on both players.
    ///
    /// Scores are only persisted once both colors are seated; both rows are
    /// written together or not at all.
    pub async fn compute_score(&self, lobby_id: LobbyId) -> Result<ScorePair, DomainError> {
        let _guard = self.locks.lock(lobby_id).await;

        let grid = self.board.board_grid(lobby_id).await?;
        let score = scoring::compute_score(&grid)?;

        let assignment = self.assignment(lobby_id).await?;
        match (assignment.get(Color::Black), assignment.get(Color::White)) {
            (Some(black), Some(white)) => {
                self.players
                    .save_players(&[
                        black.with_score(score.for_color(Color::Black)),
                        white.with_score(score.for_color(Color::White)),
                    ])
                    .await?;
                info!(
                    lobby_id,
                    black_score = score.black_score,
                    white_score = score.white_score,
                    "scores recorded"
                );
            }
            _ => {
                debug!(lobby_id, "scores computed for incomplete lobby; not persisted");
            }
        }

        Ok(score)
    }
}
