use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dao::models::GameResultEntity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoGameResultDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    winner: String,
    created_at: DateTime,
}

impl From<GameResultEntity> for MongoGameResultDocument {
    fn from(value: GameResultEntity) -> Self {
        Self {
            id: value.id,
            winner: value.winner,
            created_at: DateTime::from_system_time(value.created_at),
        }
    }
}

impl From<MongoGameResultDocument> for GameResultEntity {
    fn from(value: MongoGameResultDocument) -> Self {
        Self {
            id: value.id,
            winner: value.winner,
            created_at: value.created_at.to_system_time(),
        }
    }
}
