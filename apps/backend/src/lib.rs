#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use adapters::SeaStore;
pub use config::db::{db_url, DbKind, DbProfile};
pub use domain::{Cell, Color, LobbyId, Move, Player, ScorePair, TurnAdvance, UserId};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::db::{bootstrap_db, connect_db};
pub use repos::{BoardEngine, Lobby, LobbyStore, PlayerStore, TurnRecord, TurnStore};
pub use services::GameEngine;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
