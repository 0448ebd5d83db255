//! Wire types of the `/results` endpoints, shared by the server and the client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::GameResultEntity,
    dto::{format_system_time, validation::validate_winner_label},
};

/// Persisted outcome of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResultSummary {
    /// Identifier assigned by the store.
    pub id: Uuid,
    /// `X`, `O` or `draw`.
    pub winner: String,
    /// RFC 3339 timestamp assigned by the store.
    pub created_at: String,
}

impl From<GameResultEntity> for GameResultSummary {
    fn from(entity: GameResultEntity) -> Self {
        Self {
            id: entity.id,
            winner: entity.winner,
            created_at: format_system_time(entity.created_at),
        }
    }
}

/// Payload recording the outcome of a finished game.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SaveResultRequest {
    /// `X`, `O` or `draw`.
    #[validate(custom(function = validate_winner_label))]
    pub winner: String,
}

/// Body returned with every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable failure message.
    pub error: String,
}
