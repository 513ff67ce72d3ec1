//! JSON extractor with automatic validation using the validator crate.

use super::JsonBody;
use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Every rejection is a 400: a body that is not JSON, lacks a required field
/// or fails the `validator` rules never reaches the handler. Field-level
/// validation errors are returned in `details`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateEvent {
///     #[validate(length(min = 1))]
///     title: String,
/// }
///
/// async fn create_event(ValidatedJson(payload): ValidatedJson<CreateEvent>) -> String {
///     format!("Creating event: {}", payload.title)
/// }
///
/// let app = Router::new().route("/events", post(create_event));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = JsonBody::<T>::from_request(req, state).await?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
