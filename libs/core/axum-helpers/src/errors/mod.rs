pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// - `code`: Integer error code for logging/monitoring (e.g., 1001)
/// - `error`: Machine-readable error identifier (e.g., "VALIDATION_ERROR")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "title: must not be empty",
///   "details": {"title": [{"code": "length", "message": null, "params": {"min": 1, "value": ""}}]}
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, code) = match self {
            // Malformed bodies and missing fields are client errors, never 422
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    e.body_text(),
                    None,
                    ErrorCode::InvalidJson,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    e.to_string(),
                    Some(serde_json::to_value(&e).unwrap_or(serde_json::Value::Null)),
                    ErrorCode::ValidationError,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::Store(msg) => {
                tracing::error!(
                    error_code = ErrorCode::StoreError.code(),
                    "Store error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    None,
                    ErrorCode::StoreError,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[tokio::test]
    async fn test_store_error_echoes_message() {
        let response = AppError::Store("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "STORE_ERROR");
        assert_eq!(body["code"], 2003);
        assert_eq!(body["message"], "connection reset");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request_with_details() {
        let errors = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("name"));
        assert!(body["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn test_not_found_renders_json() {
        let response = AppError::NotFound("no such route".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
