use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    JsonBody, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    },
};
use database::DocumentStore;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::EventResult;
use crate::models::{Event, EventListResponse, EventPayload, EventResponse};
use crate::service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, show_event, update_event, delete_event),
    components(
        schemas(Event, EventPayload, EventResponse, EventListResponse),
        responses(
            BadRequestJsonResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Events", description = "Event management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the events router with all HTTP endpoints
///
/// List and create answer on both `/events` and `/events/`.
pub fn router<S: DocumentStore>(service: EventService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(show_event).put(update_event).delete(delete_event),
        )
        .with_state(shared_service)
}

/// List all events
#[utoipa::path(
    get,
    path = "/events/",
    tag = "Events",
    responses(
        (status = 200, description = "All events", body = EventListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
) -> EventResult<Json<EventListResponse>> {
    let events = service.list().await?;
    Ok(Json(events.into()))
}

/// Create a new event
#[utoipa::path(
    post,
    path = "/events/",
    tag = "Events",
    request_body = EventPayload,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    ValidatedJson(payload): ValidatedJson<EventPayload>,
) -> EventResult<impl IntoResponse> {
    let event = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(EventResponse { event })))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn show_event<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    Path(id): Path<String>,
) -> EventResult<Json<EventResponse>> {
    let event = service.show(&id).await?;
    Ok(Json(EventResponse { event }))
}

/// Replace an event's fields, keeping its ID
#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    request_body = EventPayload,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 404, description = "Event not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    Path(id): Path<String>,
    body: Result<JsonBody<EventPayload>, Response>,
) -> Result<Json<EventResponse>, Response> {
    // An unknown id is a 404 whatever the body holds
    let existing = service.show(&id).await.map_err(IntoResponse::into_response)?;
    let JsonBody(payload) = body?;

    let event = service
        .replace(existing, payload)
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(Json(EventResponse { event }))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<S: DocumentStore>(
    State(service): State<Arc<EventService<S>>>,
    Path(id): Path<String>,
) -> EventResult<impl IntoResponse> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
