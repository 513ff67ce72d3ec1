use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Fallback handler for routes that do not exist.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}
