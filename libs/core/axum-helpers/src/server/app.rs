use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`)
/// - API routes mounted at the root
/// - Request tracing
/// - JSON 404 fallback handler
///
/// Domain routers should apply their own state before being passed in.
/// Health endpoints are merged separately by the app.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// let router = create_router::<ApiDoc>(domain_events::router(service));
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serve `router` until SIGTERM/SIGINT, then run `cleanup`.
///
/// In-flight requests are drained while `cleanup` runs; `cleanup` is abandoned
/// once `shutdown_timeout` elapses.
///
/// # Errors
/// Returns an error if the listener fails to bind or the server fails while running.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => {
                tracing::warn!(
                    "Cleanup exceeded timeout of {:?}, forcing shutdown",
                    shutdown_timeout
                );
            }
        }
    });

    let serving = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { serving.wait_for_signal().await })
        .await;

    finish(serve_result, &coordinator, cleanup_handle).await
}

/// Wait for the cleanup task once serving has stopped.
///
/// A server error arrives without any signal, so shutdown is triggered here
/// to release the cleanup task.
async fn finish(
    serve_result: io::Result<()>,
    coordinator: &ShutdownCoordinator,
    cleanup_handle: JoinHandle<()>,
) -> io::Result<()> {
    if let Err(e) = &serve_result {
        tracing::error!("Server encountered an error: {:?}", e);
        coordinator.shutdown();
    }

    cleanup_handle.await.ok();

    serve_result
}
