//! Process-local result store used when no database is configured.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::GameResultEntity, result_store::ResultStore, storage::StorageResult,
};

/// Keeps results in insertion order behind an async lock.
#[derive(Clone, Default)]
pub struct MemoryResultStore {
    results: Arc<RwLock<Vec<GameResultEntity>>>,
}

impl MemoryResultStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    fn insert_result(&self, winner: String) -> BoxFuture<'static, StorageResult<GameResultEntity>> {
        let results = self.results.clone();
        Box::pin(async move {
            let entity = GameResultEntity::new(winner);
            results.write().await.push(entity.clone());
            Ok(entity)
        })
    }

    fn list_results(&self) -> BoxFuture<'static, StorageResult<Vec<GameResultEntity>>> {
        let results = self.results.clone();
        Box::pin(async move {
            let mut listed: Vec<_> = results.read().await.iter().rev().cloned().collect();
            // Stable sort: equal timestamps keep the latest insertion first.
            listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(listed)
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_newest_first() {
        let store = MemoryResultStore::new();
        let first = store.insert_result("X".into()).await.unwrap();
        let second = store.insert_result("draw".into()).await.unwrap();
        let third = store.insert_result("O".into()).await.unwrap();

        let listed = store.list_results().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|result| result.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
        assert_eq!(listed[0].winner, "O");
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryResultStore::new();
        assert!(store.list_results().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn assigns_distinct_ids() {
        let store = MemoryResultStore::new();
        let a = store.insert_result("X".into()).await.unwrap();
        let b = store.insert_result("X".into()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.created_at >= a.created_at);
    }
}
