use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::{LobbyId, UserId};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Number of seats in a lobby.
pub const SEATS: usize = 2;

/// A player's side. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// Color for the next player to join a lobby that already holds `seated`
/// players. First arrival is Black, second is White.
pub fn color_for_seat_count(lobby_id: LobbyId, seated: usize) -> Result<Color, DomainError> {
    match seated {
        0 => Ok(Color::Black),
        1 => Ok(Color::White),
        _ => Err(DomainError::lobby_full(lobby_id)),
    }
}

/// Both seated players' ids, available once each color is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seats {
    pub black: UserId,
    pub white: UserId,
}

impl Seats {
    pub fn contains(&self, user_id: UserId) -> bool {
        self.black == user_id || self.white == user_id
    }

    /// The seated player that is not `user_id`, or `None` if `user_id` is not seated.
    pub fn other(&self, user_id: UserId) -> Option<UserId> {
        if user_id == self.black {
            Some(self.white)
        } else if user_id == self.white {
            Some(self.black)
        } else {
            None
        }
    }
}

/// Per-lobby view of who plays which color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    pub black: Option<Player>,
    pub white: Option<Player>,
}

impl ColorAssignment {
    /// Build the view from a lobby's player rows.
    ///
    /// Two rows claiming the same color means the store is corrupt.
    pub fn from_players(lobby_id: LobbyId, players: &[Player]) -> Result<Self, DomainError> {
        let mut assignment = Self::default();
        for player in players {
            let slot = match player.color {
                Color::Black => &mut assignment.black,
                Color::White => &mut assignment.white,
            };
            if let Some(existing) = slot {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "lobby {lobby_id}: users {} and {} both hold {}",
                        existing.user_id,
                        player.user_id,
                        player.color.as_str()
                    ),
                ));
            }
            *slot = Some(player.clone());
        }
        Ok(assignment)
    }

    pub fn get(&self, color: Color) -> Option<&Player> {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    pub fn seated_count(&self) -> usize {
        usize::from(self.black.is_some()) + usize::from(self.white.is_some())
    }

    pub fn find(&self, user_id: UserId) -> Option<&Player> {
        self.black
            .iter()
            .chain(self.white.iter())
            .find(|p| p.user_id == user_id)
    }

    /// Both ids, or `None` while a color is still open.
    pub fn seats(&self) -> Option<Seats> {
        match (&self.black, &self.white) {
            (Some(black), Some(white)) => Some(Seats {
                black: black.user_id,
                white: white.user_id,
            }),
            _ => None,
        }
    }
}
