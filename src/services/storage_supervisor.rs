use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::{result_store::ResultStore, storage::StorageError},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_millis(1_000);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// Connect to the storage backend and keep the shared state in degraded mode while it is unavailable.
pub async fn run<F, Fut>(state: SharedState, mut connect: F)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn ResultStore>, StorageError>> + Send,
{
    let mut delay = INITIAL_DELAY;

    loop {
        match connect().await {
            Ok(store) => {
                state.install_result_store(store.clone()).await;
                info!("storage connection established; leaving degraded mode");
                delay = INITIAL_DELAY;

                watch_store(&state, store.as_ref()).await;

                // Reconnects exhausted: drop the stale handle before starting over.
                state.clear_result_store().await;
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
            Err(err) => {
                warn!(error = %err, "storage connection attempt failed");
                sleep(delay).await;
                delay = (delay * 2).min(MAX_DELAY);
            }
        }
    }
}

/// Poll `store` until a failed health check cannot be repaired by reconnecting.
async fn watch_store(state: &SharedState, store: &dyn ResultStore) {
    loop {
        if store.health_check().await.is_ok() {
            if state.is_degraded() {
                info!("storage healthy again; leaving degraded mode");
                state.update_degraded(false);
            }
            sleep(HEALTH_POLL_INTERVAL).await;
            continue;
        }

        if !reconnect(state, store).await {
            warn!("exhausted storage reconnect attempts; staying in degraded mode");
            return;
        }

        state.update_degraded(false);
        sleep(HEALTH_POLL_INTERVAL).await;
    }
}

async fn reconnect(state: &SharedState, store: &dyn ResultStore) -> bool {
    let mut reconnect_delay = INITIAL_DELAY;

    for attempt in 0..MAX_RECONNECT_ATTEMPTS {
        match store.try_reconnect().await {
            Ok(()) => {
                info!(attempt, "storage reconnection succeeded after health check failure");
                return true;
            }
            Err(err) => {
                if attempt == 0 {
                    warn!(
                        attempt, error = %err,
                        "storage reconnect first attempt failed; entering degraded mode"
                    );
                    state.update_degraded(true);
                } else {
                    warn!(attempt, error = %err, "storage reconnect attempt failed");
                }
                sleep(reconnect_delay).await;
                reconnect_delay = (reconnect_delay * 2).min(MAX_DELAY);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use futures::future::BoxFuture;
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        dao::{
            models::GameResultEntity, result_store::MemoryResultStore, storage::StorageResult,
        },
        state::AppState,
    };

    /// Store whose backend went away: every call fails, reconnects included.
    struct UnreachableStore {
        reconnects: Arc<AtomicU32>,
    }

    fn offline() -> StorageError {
        StorageError::unavailable(
            "store unreachable".into(),
            std::io::Error::other("connection refused"),
        )
    }

    impl ResultStore for UnreachableStore {
        fn insert_result(&self, _winner: String) -> BoxFuture<'static, StorageResult<GameResultEntity>> {
            Box::pin(async { Err(offline()) })
        }

        fn list_results(&self) -> BoxFuture<'static, StorageResult<Vec<GameResultEntity>>> {
            Box::pin(async { Err(offline()) })
        }

        fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
            Box::pin(async { Err(offline()) })
        }

        fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
            self.reconnects.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Err(offline()) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn installs_store_once_connected() {
        let state = AppState::new();
        let mut attempts = 0;

        let supervisor = tokio::spawn(run(state.clone(), move || {
            attempts += 1;
            let outcome = if attempts < 2 {
                Err(StorageError::InvalidRecord {
                    id: "bootstrap".into(),
                    reason: "not ready".into(),
                })
            } else {
                Ok(Arc::new(MemoryResultStore::new()) as Arc<dyn ResultStore>)
            };
            async move { outcome }
        }));

        let mut watcher = state.degraded_watcher();
        watcher.wait_for(|degraded| !*degraded).await.unwrap();
        assert!(state.result_store().await.is_some());

        supervisor.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn replaces_store_after_reconnects_are_exhausted() {
        let state = AppState::new();
        let reconnects = Arc::new(AtomicU32::new(0));
        let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();
        let mut connects = 0;

        let supervisor = tokio::spawn(run(state.clone(), {
            let state = state.clone();
            let reconnects = reconnects.clone();
            move || {
                connects += 1;
                let first = connects == 1;
                let state = state.clone();
                let reconnects = reconnects.clone();
                let seen_tx = seen_tx.clone();
                async move {
                    if first {
                        return Ok::<_, StorageError>(
                            Arc::new(UnreachableStore { reconnects }) as Arc<dyn ResultStore>
                        );
                    }
                    // Record what the state looked like before the fresh connection.
                    let _ = seen_tx.send((state.is_degraded(), state.result_store().await.is_none()));
                    Ok::<_, StorageError>(Arc::new(MemoryResultStore::new()) as Arc<dyn ResultStore>)
                }
            }
        }));

        let (degraded, cleared) = seen_rx.recv().await.unwrap();
        assert!(degraded, "failed reconnects must enter degraded mode");
        assert!(cleared, "the unreachable store must be dropped");
        assert_eq!(reconnects.load(Ordering::SeqCst), MAX_RECONNECT_ATTEMPTS);

        let mut watcher = state.degraded_watcher();
        watcher.wait_for(|degraded| !*degraded).await.unwrap();
        let store = state.result_store().await.unwrap();
        assert!(store.health_check().await.is_ok());
        assert!(store.list_results().await.unwrap().is_empty());

        supervisor.abort();
    }
}
