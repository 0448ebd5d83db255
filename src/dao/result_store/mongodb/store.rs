use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Collection, Database, IndexModel, bson::doc, options::IndexOptions};
use tokio::sync::RwLock;
use tracing::info;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::MongoGameResultDocument,
};
use crate::dao::{
    models::GameResultEntity, result_store::ResultStore, storage::StorageResult,
};

const RESULT_COLLECTION_NAME: &str = "game_results";

/// Result store backed by a MongoDB collection.
#[derive(Clone)]
pub struct MongoResultStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    database: RwLock<Database>,
    config: MongoConfig,
}

impl MongoInner {
    async fn ping(&self) -> MongoResult<()> {
        let database = self.database.read().await.clone();

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }

    async fn reconnect(&self) -> MongoResult<()> {
        let database =
            establish_connection(&self.config.options, &self.config.database_name).await?;
        *self.database.write().await = database;
        info!("MongoDB connection re-established");
        Ok(())
    }
}

impl MongoResultStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let database = establish_connection(&config.options, &config.database_name).await?;

        let inner = Arc::new(MongoInner {
            database: RwLock::new(database),
            config,
        });

        let store = Self { inner };
        store.ensure_indexes().await?;
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let index = IndexModel::builder()
            .keys(doc! {"created_at": -1})
            .options(
                IndexOptions::builder()
                    .name(Some("result_created_at_idx".to_owned()))
                    .build(),
            )
            .build();

        self.collection()
            .await
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: RESULT_COLLECTION_NAME,
                index: "created_at",
                source,
            })?;

        Ok(())
    }

    async fn collection(&self) -> Collection<MongoGameResultDocument> {
        let guard = self.inner.database.read().await;
        guard.collection::<MongoGameResultDocument>(RESULT_COLLECTION_NAME)
    }

    async fn insert_result(&self, winner: String) -> MongoResult<GameResultEntity> {
        let document = MongoGameResultDocument::from(GameResultEntity::new(winner.clone()));

        self.collection()
            .await
            .insert_one(&document)
            .await
            .map_err(|source| MongoDaoError::InsertResult { winner, source })?;

        // Answer with what was stored so the timestamp matches later reads.
        Ok(document.into())
    }

    async fn list_results(&self) -> MongoResult<Vec<GameResultEntity>> {
        let documents: Vec<MongoGameResultDocument> = self
            .collection()
            .await
            .find(doc! {})
            .sort(doc! {"created_at": -1, "_id": -1})
            .await
            .map_err(|source| MongoDaoError::ListResults { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListResults { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

impl ResultStore for MongoResultStore {
    fn insert_result(&self, winner: String) -> BoxFuture<'static, StorageResult<GameResultEntity>> {
        let store = self.clone();
        Box::pin(async move { store.insert_result(winner).await.map_err(Into::into) })
    }

    fn list_results(&self) -> BoxFuture<'static, StorageResult<Vec<GameResultEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_results().await.map_err(Into::into) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.ping().await.map_err(Into::into) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.inner.reconnect().await.map_err(Into::into) })
    }
}
