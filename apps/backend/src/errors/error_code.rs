//! Error codes for the reversi backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes
//! are SCREAMING_SNAKE_CASE and map 1:1 to the strings a transport layer
//! exposes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Turn & seating rules
    /// Lobby already seats a Black and a White player
    LobbyFull,
    /// Turn operation before both colors are seated
    PlayersIncomplete,
    /// User is not seated in the lobby
    NotSeated,
    /// Caller does not hold the turn
    OutOfTurn,
    /// Board grid is not rectangular or has unknown cell codes
    MalformedGrid,
    /// General validation error
    ValidationError,

    // Resource Not Found
    LobbyNotFound,
    PlayerNotFound,
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Storage or board engine unreachable
    DependencyUnavailable,
    /// Data corruption detected
    DataCorruption,
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LobbyFull => "LOBBY_FULL",
            Self::PlayersIncomplete => "PLAYERS_INCOMPLETE",
            Self::NotSeated => "NOT_SEATED",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::MalformedGrid => "MALFORMED_GRID",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::LobbyNotFound => "LOBBY_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DependencyUnavailable => "DEPENDENCY_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
