use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{dao::storage::StorageError, dto::results::ErrorResponse};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend is unavailable.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(format!("validation failed: {}", err))
    }
}

/// Errors surfaced over HTTP. Every cause collapses into one fixed message
/// per endpoint; details only reach the logs.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the result history failed.
    #[error("Failed to fetch results")]
    FetchResults,
    /// Recording a game result failed, including malformed payloads.
    #[error("Failed to save result")]
    SaveResult,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let payload = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn errors_render_fixed_messages() {
        let response = AppError::SaveResult.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Failed to save result"}"#);
    }

    #[test]
    fn storage_errors_become_unavailable() {
        let err: ServiceError = StorageError::InvalidRecord {
            id: "result::1".into(),
            reason: "malformed uuid".into(),
        }
        .into();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }
}
