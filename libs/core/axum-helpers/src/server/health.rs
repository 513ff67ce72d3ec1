use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::future::Future;
use std::pin::Pin;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// A boxed future for health checks with a string error
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs multiple health checks concurrently and returns aggregated results.
///
/// The body is `{"status": "ready" | "not ready", "<name>": "connected" | "disconnected", ...}`;
/// any failing check turns the response into a 503.
///
/// # Example
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture)> = vec![(
///     "database",
///     Box::pin(async { check_database(&client).await }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let names: Vec<_> = checks.iter().map(|(name, _)| *name).collect();
    let futures: Vec<_> = checks.into_iter().map(|(_, check)| check).collect();
    let results = join_all(futures).await;

    let mut body = Map::new();
    let mut all_healthy = true;

    for (name, result) in names.into_iter().zip(results) {
        let status = match result {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!("Readiness check failed: {} error: {:?}", name, e);
                all_healthy = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(status));
    }

    body.insert(
        "status".to_string(),
        json!(if all_healthy { "ready" } else { "not ready" }),
    );

    if all_healthy {
        Ok((StatusCode::OK, Json(Value::Object(body))))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(Value::Object(body))))
    }
}

/// Liveness handler: always 200 while the process is serving.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Service banner: `{"<name>": {"version": "<version>"}}`.
pub async fn info_handler(State(app): State<AppInfo>) -> Json<Value> {
    let mut body = Map::new();
    body.insert(app.name.to_string(), json!({ "version": app.version }));
    Json(Value::Object(body))
}

/// Creates a router with the `/health` endpoint.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

/// Creates a router answering `GET /` with the service name and version.
pub fn info_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .with_state(app_info)
}
