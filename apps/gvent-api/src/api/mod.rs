//! API routes module

pub mod events;
pub mod health;

use axum::Router;
use axum_helpers::server::{create_router, health_router, info_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// The complete application: banner, liveness, readiness, events and docs
pub fn app(state: &AppState) -> Router {
    let routes = Router::new()
        .merge(info_router(state.config.app))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
        .merge(events::router(state));

    create_router::<ApiDoc>(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{Client, MongoConfig, MongoDocumentStore};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    /// State pointing at a port nothing listens on; the driver connects lazily.
    async fn offline_state() -> AppState {
        let mongodb = MongoConfig::new("127.0.0.1", 1);
        let client = Client::with_uri_str(format!(
            "{}/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
            mongodb.url()
        ))
        .await
        .unwrap();

        AppState {
            store: MongoDocumentStore::new(client.database(mongodb.database())),
            mongo_client: client,
            config: Config {
                app: app_info!(),
                mongodb,
                server: ServerConfig::default(),
                environment: Environment::Development,
                log_level: tracing::Level::INFO,
            },
        }
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = app(&offline_state().await);
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_root_reports_version() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["gvent-api"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_is_up_without_database() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_database() {
        let (status, body) = get("/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_500() {
        let (status, body) = get("/events/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "STORE_ERROR");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_openapi_lists_event_paths() {
        let (status, body) = get("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/events/"].is_object());
        assert!(body["paths"]["/events/{id}"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
