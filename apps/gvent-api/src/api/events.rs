//! Events API routes

use crate::state::AppState;
use axum::Router;
use domain_events::{EventService, handlers};

/// Events router backed by the application's document store
pub fn router(state: &AppState) -> Router {
    handlers::router(EventService::new(state.store.clone()))
}
