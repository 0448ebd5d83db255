use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use tracing::warn;

use crate::{
    dto::results::{ErrorResponse, GameResultSummary, SaveResultRequest},
    error::AppError,
    services::results_service,
    state::SharedState,
};

/// Routes exposing the match history.
pub fn router() -> Router<SharedState> {
    Router::new().route("/results", get(list_results).post(save_result))
}

/// List every recorded game result, newest first.
#[utoipa::path(
    get,
    path = "/results",
    tag = "results",
    responses(
        (status = 200, description = "Recorded results, newest first", body = [GameResultSummary]),
        (status = 500, description = "Results could not be read", body = ErrorResponse)
    )
)]
pub async fn list_results(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GameResultSummary>>, AppError> {
    let results = results_service::list_results(&state)
        .await
        .map_err(|err| {
            warn!(error = %err, "failed to fetch results");
            AppError::FetchResults
        })?;
    Ok(Json(results))
}

/// Record the outcome of a finished game.
#[utoipa::path(
    post,
    path = "/results",
    tag = "results",
    request_body = SaveResultRequest,
    responses(
        (status = 200, description = "Result recorded", body = GameResultSummary),
        (status = 500, description = "Result could not be recorded", body = ErrorResponse)
    )
)]
pub async fn save_result(
    State(state): State<SharedState>,
    payload: Result<Json<SaveResultRequest>, JsonRejection>,
) -> Result<Json<GameResultSummary>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected game result payload");
        AppError::SaveResult
    })?;

    let summary = results_service::save_result(&state, request)
        .await
        .map_err(|err| {
            warn!(error = %err, "failed to save result");
            AppError::SaveResult
        })?;
    Ok(Json(summary))
}
