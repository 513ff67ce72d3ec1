use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(StoreError),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<StoreError> for EventError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id, .. } => EventError::NotFound(id),
            other => EventError::Store(other),
        }
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => AppError::NotFound(format!("Event {} not found", id)),
            EventError::Validation(errors) => AppError::ValidationError(errors),
            EventError::Store(e) => AppError::Store(e.to_string()),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            // Unknown ids answer with a bare 404
            EventError::NotFound(id) => {
                tracing::debug!("event {} not found", id);
                StatusCode::NOT_FOUND.into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}
