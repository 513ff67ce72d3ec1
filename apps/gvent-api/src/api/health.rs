//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - pings the database
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let client = state.mongo_client.clone();

    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async move {
            let status = check_health_detailed(&client).await;
            tracing::debug!(
                healthy = status.healthy,
                response_time_ms = status.response_time_ms,
                "database ping"
            );
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_default())
            }
        }),
    )];

    run_health_checks(checks).await
}
