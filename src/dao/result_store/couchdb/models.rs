use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::error::CouchDaoError;
use crate::dao::models::GameResultEntity;

pub const RESULT_PREFIX: &str = "result::";
pub const END_SUFFIX: &str = "\u{ffff}";
/// Width of the zero-padded nanosecond timestamp embedded in document ids.
/// Twenty digits cover every `u64` nanosecond count.
const TIMESTAMP_WIDTH: usize = 20;

#[derive(Debug, Deserialize)]
pub struct AllDocsResponse {
    pub rows: Vec<AllDocsRow>,
}

#[derive(Debug, Deserialize)]
pub struct AllDocsRow {
    #[serde(default)]
    pub doc: Option<Value>,
}

/// Stored shape of a game result. The id sorts chronologically so that
/// `_all_docs?descending=true` yields the newest results first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouchResultDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_rev", skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    pub winner: String,
    pub created_at: SystemTime,
}

impl From<GameResultEntity> for CouchResultDocument {
    fn from(entity: GameResultEntity) -> Self {
        Self {
            id: result_doc_id(entity.created_at, entity.id),
            rev: None,
            winner: entity.winner,
            created_at: entity.created_at,
        }
    }
}

impl CouchResultDocument {
    pub fn try_into_entity(self) -> Result<GameResultEntity, CouchDaoError> {
        let id = parse_result_doc_id(&self.id)?;
        Ok(GameResultEntity {
            id,
            winner: self.winner,
            created_at: self.created_at,
        })
    }
}

pub fn result_doc_id(created_at: SystemTime, id: Uuid) -> String {
    let nanos = created_at
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos();
    format!("{RESULT_PREFIX}{nanos:0width$}::{id}", width = TIMESTAMP_WIDTH)
}

pub fn parse_result_doc_id(doc_id: &str) -> Result<Uuid, CouchDaoError> {
    let invalid = |kind| CouchDaoError::InvalidDocId {
        doc_id: doc_id.to_owned(),
        kind,
    };

    let rest = doc_id
        .strip_prefix(RESULT_PREFIX)
        .ok_or_else(|| invalid("missing result prefix"))?;
    let (_, raw_id) = rest
        .split_once("::")
        .ok_or_else(|| invalid("missing timestamp separator"))?;
    Uuid::parse_str(raw_id).map_err(|_| invalid("malformed uuid"))
}
