//! Tic-tac-toe results backend entrypoint wiring the REST layer and the result store.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tictactoe_back::{
    config::{AppConfig, StoreBackend},
    dao::result_store::MemoryResultStore,
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let app_state = AppState::new();

    start_storage(&app_state, config.store()).await;
    // Build the HTTP router once the shared state is ready.
    let app = routes::app(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Install the configured result store, supervising database backends in the background.
async fn start_storage(state: &SharedState, backend: StoreBackend) {
    match backend {
        StoreBackend::Memory => {
            info!("using in-memory result store; history is lost on restart");
            state
                .install_result_store(Arc::new(MemoryResultStore::new()))
                .await;
        }
        StoreBackend::Mongo => start_mongo(state),
        StoreBackend::Couch => start_couch(state),
    }
}

#[cfg(feature = "mongo-store")]
fn start_mongo(state: &SharedState) {
    use tictactoe_back::{
        dao::result_store::{
            ResultStore,
            mongodb::{MongoConfig, MongoResultStore},
        },
        dao::storage::StorageError,
        services::storage_supervisor,
    };

    tokio::spawn(storage_supervisor::run(state.clone(), || async {
        let config = MongoConfig::from_env().await?;
        let store = MongoResultStore::connect(config).await?;
        Ok::<_, StorageError>(Arc::new(store) as Arc<dyn ResultStore>)
    }));
}

#[cfg(not(feature = "mongo-store"))]
fn start_mongo(_state: &SharedState) {
    tracing::error!("built without the `mongo-store` feature; staying in degraded mode");
}

#[cfg(feature = "couch-store")]
fn start_couch(state: &SharedState) {
    use tictactoe_back::{
        dao::result_store::{
            ResultStore,
            couchdb::{CouchConfig, CouchResultStore},
        },
        dao::storage::StorageError,
        services::storage_supervisor,
    };

    tokio::spawn(storage_supervisor::run(state.clone(), || async {
        let config = CouchConfig::from_env()?;
        let store = CouchResultStore::connect(config).await?;
        Ok::<_, StorageError>(Arc::new(store) as Arc<dyn ResultStore>)
    }));
}

#[cfg(not(feature = "couch-store"))]
fn start_couch(_state: &SharedState) {
    tracing::error!("built without the `couch-store` feature; staying in degraded mode");
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
