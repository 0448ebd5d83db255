use tracing::info;
use validator::Validate;

use crate::{
    dto::results::{GameResultSummary, SaveResultRequest},
    error::ServiceError,
    state::SharedState,
};

/// Every stored result, newest first.
pub async fn list_results(state: &SharedState) -> Result<Vec<GameResultSummary>, ServiceError> {
    let store = state.require_result_store().await?;
    let results = store.list_results().await?;
    Ok(results.into_iter().map(Into::into).collect())
}

/// Validate and persist the outcome of a finished game.
pub async fn save_result(
    state: &SharedState,
    request: SaveResultRequest,
) -> Result<GameResultSummary, ServiceError> {
    request.validate()?;

    let store = state.require_result_store().await?;
    let entity = store.insert_result(request.winner).await?;
    info!(id = %entity.id, winner = %entity.winner, "game result recorded");

    Ok(entity.into())
}
