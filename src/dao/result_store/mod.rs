#[cfg(feature = "couch-store")]
pub mod couchdb;
pub mod memory;
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::GameResultEntity;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

pub use memory::MemoryResultStore;

/// Abstraction over the persistence layer for finished game results.
pub trait ResultStore: Send + Sync {
    /// Persist a new result for `winner`; the store assigns id and timestamp.
    fn insert_result(&self, winner: String) -> BoxFuture<'static, StorageResult<GameResultEntity>>;
    /// Every stored result, newest first.
    fn list_results(&self) -> BoxFuture<'static, StorageResult<Vec<GameResultEntity>>>;
    /// Cheap probe used by the health endpoint and the storage supervisor.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Re-establish the backend connection after a failed health check.
    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>>;
}
