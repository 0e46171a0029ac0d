use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use invitation_core::error::CoreError;
use serde_json::json;

/// Message returned for every failure whose details stay server-side.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `invitation_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The comment store rejected or failed a read or write.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                log_persistence_error(err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log a comment store failure with whatever detail the driver offers.
///
/// Constraint violations carry the constraint name so a rejected write can
/// be traced to the rule that refused it.
fn log_persistence_error(err: &sqlx::Error) {
    match err {
        sqlx::Error::Database(db_err) => {
            tracing::error!(
                error = %db_err,
                code = db_err.code().as_deref().unwrap_or("unknown"),
                constraint = db_err.constraint().unwrap_or("none"),
                "Comment store rejected the operation",
            );
        }
        other => {
            tracing::error!(error = %other, "Comment store unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use http_body_util::BodyExt;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    async fn body_of(err: AppError) -> serde_json::Value {
        let bytes = err.into_response().into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_failure_body_hides_driver_detail() {
        let body = body_of(AppError::Database(sqlx::Error::PoolClosed)).await;
        assert_eq!(
            body,
            json!({ "error": "An internal error occurred", "code": "PERSISTENCE_ERROR" })
        );
    }

    #[tokio::test]
    async fn test_core_internal_body_is_generic() {
        let body = body_of(AppError::Core(CoreError::Internal("gallery.json: EACCES".into()))).await;
        assert_eq!(
            body,
            json!({ "error": "An internal error occurred", "code": "INTERNAL_ERROR" })
        );
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err = AppError::Core(CoreError::Conflict("Duplicate media id 1".into()));
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = AppError::Core(CoreError::Validation("content too long".into()));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_failure_maps_to_500() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        assert_eq!(
            status_of(AppError::BadRequest("missing field `name`".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
