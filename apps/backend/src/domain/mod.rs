//! Domain layer: pure seating, turn and scoring logic.
//!
//! Nothing in here performs I/O. Services fetch players, turn records and
//! board snapshots, then hand them to these functions.

pub mod color;
pub mod player;
pub mod scoring;
pub mod turn;

#[cfg(test)]
mod tests_props;

pub type LobbyId = i64;
pub type UserId = i64;

// Re-exports for ergonomics
pub use color::{color_for_seat_count, Color, ColorAssignment, Seats};
pub use player::{Player, INITIAL_SCORE};
pub use scoring::{compute_score, BoardGrid, Cell, Move, ScorePair};
pub use turn::{decide_next_turn, opponent_for_move, resolve_turn_holder, TurnAdvance, TurnState};
