//! End-to-end tests of the HTTP client and match controller against a live server.

use std::sync::Arc;

use reqwest::StatusCode;
use tokio::net::TcpListener;

use tictactoe_back::{
    client::{ClientError, MatchController, ResultsApi, ResultsClient, save_and_refresh},
    dao::result_store::MemoryResultStore,
    game::{GameStatus, Mark},
    routes,
    state::{AppState, SharedState},
};

async fn spawn_server(state: SharedState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, routes::app(state)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn memory_server() -> String {
    spawn_server(AppState::with_store(Arc::new(MemoryResultStore::new()))).await
}

#[tokio::test]
async fn client_saves_and_lists_results() {
    let client = ResultsClient::new(&memory_server().await).unwrap();

    assert!(client.list_results().await.unwrap().is_empty());

    let saved = client.save_result("O".into()).await.unwrap();
    assert_eq!(saved.winner, "O");

    let listed = client.list_results().await.unwrap();
    assert_eq!(listed, vec![saved]);
}

#[tokio::test]
async fn save_and_refresh_returns_both_steps() {
    let base_url = memory_server().await;
    let client = ResultsClient::new(&format!("{base_url}/")).unwrap();

    let outcome = save_and_refresh(&client, "draw".into()).await;
    let saved = outcome.saved.unwrap();
    let refreshed = outcome.refreshed.unwrap().unwrap();
    assert_eq!(refreshed[0], saved);
}

#[tokio::test]
async fn server_errors_surface_their_message() {
    let client = ResultsClient::new(&spawn_server(AppState::new()).await).unwrap();

    match client.list_results().await {
        Err(ClientError::Status {
            status, message, ..
        }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "Failed to fetch results");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let outcome = save_and_refresh(&client, "X".into()).await;
    assert!(matches!(
        outcome.saved,
        Err(ClientError::Status { ref message, .. }) if message == "Failed to save result"
    ));
    assert!(outcome.refreshed.is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ResultsClient::new(&format!("http://{addr}")).unwrap();
    assert!(matches!(
        client.list_results().await,
        Err(ClientError::Request { .. })
    ));
}

#[tokio::test]
async fn finished_match_lands_in_shared_history() {
    let base_url = memory_server().await;
    let mut controller = MatchController::new(ResultsClient::new(&base_url).unwrap());
    assert!(controller.refresh_history().await);

    // X: 0, 4, 8 takes the main diagonal.
    for index in [0, 1, 4, 2, 8] {
        controller.play(index);
    }
    assert_eq!(controller.game().status(), GameStatus::Won(Mark::X));

    let outcome = controller.reset().await.expect("finished game is recorded");
    assert!(outcome.is_saved());
    assert_eq!(controller.history()[0].winner, "X");
    assert!(!controller.game().is_over());

    // A second player session sees the same history.
    let mut other = MatchController::new(ResultsClient::new(&base_url).unwrap());
    assert!(other.refresh_history().await);
    assert_eq!(other.history(), controller.history());
}
