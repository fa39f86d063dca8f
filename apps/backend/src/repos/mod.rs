//! Ports the services depend on.
//!
//! Storage ports are implemented by the SeaORM adapter (`adapters`); the
//! board engine is an external collaborator that owns move generation.

pub mod board;
pub mod lobbies;
pub mod players;
pub mod turns;

pub use board::BoardEngine;
pub use lobbies::{Lobby, LobbyStore};
pub use players::PlayerStore;
pub use turns::{TurnRecord, TurnStore};
