use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{LobbyId, UserId};
use crate::errors::domain::DomainError;

/// Persisted turn of one lobby. No record means no turn assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub lobby_id: LobbyId,
    pub current_turn_user_id: UserId,
    pub version: i32,
}

#[async_trait]
pub trait TurnStore: Send + Sync {
    async fn load_turn(&self, lobby_id: LobbyId) -> Result<Option<TurnRecord>, DomainError>;

    /// Compare-and-swap write.
    ///
    /// `expected_version == None` creates the record and fails with
    /// `ConflictKind::OptimisticLock` if one already exists. `Some(v)` updates
    /// only if the stored version is still `v`. Returns the record as stored,
    /// with its new version.
    async fn save_turn(
        &self,
        lobby_id: LobbyId,
        current_turn_user_id: UserId,
        expected_version: Option<i32>,
    ) -> Result<TurnRecord, DomainError>;
}
