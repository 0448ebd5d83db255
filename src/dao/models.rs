use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Outcome of one finished game as held by the storage layer.
///
/// Records are immutable once created: the store assigns `id` and
/// `created_at` and never rewrites them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResultEntity {
    /// Identifier assigned by the store.
    pub id: Uuid,
    /// Winning mark (`X`/`O`) or the draw label.
    pub winner: String,
    /// Time the store accepted the record.
    pub created_at: SystemTime,
}

impl GameResultEntity {
    /// Stamp a new record with a fresh identifier and the current time.
    pub fn new(winner: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            winner,
            created_at: SystemTime::now(),
        }
    }
}
