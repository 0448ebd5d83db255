use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the tic-tac-toe results backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::results::list_results,
        crate::routes::results::save_result,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
            crate::dto::results::GameResultSummary,
            crate::dto::results::SaveResultRequest,
            crate::dto::results::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "results", description = "Match history of finished games"),
    )
)]
pub struct ApiDoc;
