//! JSON extractor that rejects with 400 instead of axum's default statuses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Parses the body as JSON without running validation.
///
/// Use when the handler has to do work (such as an existence check) before
/// the payload is validated. Missing fields and malformed JSON become a 400
/// `INVALID_JSON` response.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(data)| JsonBody(data))
            .map_err(|e| AppError::from(e).into_response())
    }
}
