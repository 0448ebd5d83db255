//! HTTP-level tests for the results endpoints, driven through the router without a socket.

use std::{io, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use futures::future::BoxFuture;
use serde_json::{Value, json};
use tower::ServiceExt;

use tictactoe_back::{
    dao::{
        models::GameResultEntity,
        result_store::{MemoryResultStore, ResultStore},
        storage::{StorageError, StorageResult},
    },
    routes,
    state::{AppState, SharedState},
};

/// Store whose every operation fails as if the database were down.
struct BrokenStore;

fn down() -> StorageError {
    StorageError::unavailable("database down".into(), io::Error::other("connection refused"))
}

impl ResultStore for BrokenStore {
    fn insert_result(&self, _winner: String) -> BoxFuture<'static, StorageResult<GameResultEntity>> {
        Box::pin(async { Err(down()) })
    }

    fn list_results(&self) -> BoxFuture<'static, StorageResult<Vec<GameResultEntity>>> {
        Box::pin(async { Err(down()) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Err(down()) })
    }

    fn try_reconnect(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Err(down()) })
    }
}

fn memory_app() -> Router {
    app_with(AppState::with_store(Arc::new(MemoryResultStore::new())))
}

fn app_with(state: SharedState) -> Router {
    routes::app(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_results(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/results")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn saved_result_is_first_in_history() {
    let app = memory_app();

    let (status, created) = send(&app, post_results(r#"{"winner":"X"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["winner"], "X");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let (status, listed) = send(&app, get("/results")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["winner"], "X");
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn history_is_newest_first() {
    let app = memory_app();
    for winner in ["X", "draw", "O"] {
        let (status, _) = send(&app, post_results(&json!({ "winner": winner }).to_string())).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, listed) = send(&app, get("/results")).await;
    let winners: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|result| result["winner"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(winners, vec!["O", "draw", "X"]);
}

#[tokio::test]
async fn empty_history_is_an_empty_array() {
    let (status, listed) = send(&memory_app(), get("/results")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn unparsable_body_fails_with_fixed_message() {
    let app = memory_app();
    let (status, body) = send(&app, post_results("{winner: X")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save result" }));

    let (_, listed) = send(&app, get("/results")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn missing_winner_or_content_type_fails() {
    let app = memory_app();
    let (status, body) = send(&app, post_results("{}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save result");

    let without_content_type = Request::builder()
        .method("POST")
        .uri("/results")
        .body(Body::from(r#"{"winner":"X"}"#))
        .unwrap();
    let (status, body) = send(&app, without_content_type).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save result");
}

#[tokio::test]
async fn unknown_winner_label_is_rejected() {
    let (status, body) = send(&memory_app(), post_results(r#"{"winner":"nobody"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save result" }));
}

#[tokio::test]
async fn store_failures_collapse_to_fixed_messages() {
    let app = app_with(AppState::with_store(Arc::new(BrokenStore)));

    let (status, body) = send(&app, get("/results")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch results" }));

    let (status, body) = send(&app, post_results(r#"{"winner":"O"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to save result" }));
}

#[tokio::test]
async fn degraded_mode_fails_both_endpoints() {
    let app = app_with(AppState::new());

    let (status, body) = send(&app, get("/results")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch results");

    let (status, body) = send(&app, post_results(r#"{"winner":"X"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save result");
}

#[tokio::test]
async fn healthcheck_reports_store_state() {
    let (status, body) = send(&memory_app(), get("/healthcheck")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let broken = app_with(AppState::with_store(Arc::new(BrokenStore)));
    let (_, body) = send(&broken, get("/healthcheck")).await;
    assert_eq!(body, json!({ "status": "degraded" }));

    let (_, body) = send(&app_with(AppState::new()), get("/healthcheck")).await;
    assert_eq!(body, json!({ "status": "degraded" }));
}

#[tokio::test]
async fn openapi_document_lists_results_paths() {
    let (status, doc) = send(&memory_app(), get(routes::docs::OPENAPI_PATH)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/results"]["get"].is_object());
    assert!(doc["paths"]["/results"]["post"].is_object());
    assert!(doc["paths"]["/healthcheck"]["get"].is_object());
}
