mod config;
mod error;
mod models;
mod store;

pub use config::CouchConfig;
pub use error::CouchDaoError;
pub use store::CouchResultStore;

use crate::dao::storage::StorageError;

impl From<CouchDaoError> for StorageError {
    fn from(err: CouchDaoError) -> Self {
        match err {
            CouchDaoError::InvalidDocId { doc_id, kind } => StorageError::InvalidRecord {
                id: doc_id,
                reason: kind.to_string(),
            },
            other => StorageError::unavailable(other.to_string(), other),
        }
    }
}
