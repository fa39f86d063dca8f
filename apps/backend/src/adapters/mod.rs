//! SeaORM adapters for the storage ports.
//!
//! The `*_sea` modules hold plain functions generic over `ConnectionTrait`
//! that return `DbErr`; `SeaStore` wraps them behind the repo traits and maps
//! errors to `DomainError`.

pub mod lobbies_sea;
pub mod players_sea;
pub mod store_sea;
pub mod turns_sea;

pub use store_sea::SeaStore;
