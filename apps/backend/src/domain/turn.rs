//! Turn state machine for a two-seat lobby.
//!
//! `NoTurnAssigned` holds until both colors are seated and the turn is first
//! resolved; it then becomes `TurnOf(black)`. After each completed move the
//! turn passes to the opponent, unless the opponent has no legal move, in
//! which case it stays with the mover.

use serde::{Deserialize, Serialize};

use crate::domain::color::Seats;
use crate::domain::{LobbyId, UserId};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    NoTurnAssigned,
    TurnOf(UserId),
}

impl TurnState {
    pub fn from_stored(current_turn_user_id: Option<UserId>) -> Self {
        match current_turn_user_id {
            Some(user_id) => TurnState::TurnOf(user_id),
            None => TurnState::NoTurnAssigned,
        }
    }
}

/// Outcome of a turn advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAdvance {
    pub next: UserId,
    /// The opponent had no legal move and was skipped.
    pub passed: bool,
}

/// The player holding the turn once both seats are filled.
///
/// `NoTurnAssigned` resolves to Black. A stored holder that is not one of
/// the seated players is a corrupt record.
pub fn resolve_turn_holder(
    lobby_id: LobbyId,
    seats: &Seats,
    state: TurnState,
) -> Result<UserId, DomainError> {
    match state {
        TurnState::NoTurnAssigned => Ok(seats.black),
        TurnState::TurnOf(user_id) if seats.contains(user_id) => Ok(user_id),
        TurnState::TurnOf(user_id) => Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("lobby {lobby_id}: turn held by unseated user {user_id}"),
        )),
    }
}

/// Check that `current` may end a turn and return the opponent.
pub fn opponent_for_move(
    lobby_id: LobbyId,
    seats: &Seats,
    holder: UserId,
    current: UserId,
) -> Result<UserId, DomainError> {
    let Some(opponent) = seats.other(current) else {
        return Err(DomainError::validation(
            ValidationKind::NotSeated,
            format!("advance_turn: user {current} is not seated in lobby {lobby_id}"),
        ));
    };

    if current != holder {
        return Err(DomainError::conflict(
            ConflictKind::OutOfTurn,
            format!("advance_turn: lobby {lobby_id} turn belongs to user {holder}, not {current}"),
        ));
    }

    Ok(opponent)
}

/// Hand the turn to the opponent if they can move, otherwise keep it.
pub fn decide_next_turn(
    current: UserId,
    opponent: UserId,
    opponent_has_moves: bool,
) -> TurnAdvance {
    if opponent_has_moves {
        TurnAdvance {
            next: opponent,
            passed: false,
        }
    } else {
        TurnAdvance {
            next: current,
            passed: true,
        }
    }
}
