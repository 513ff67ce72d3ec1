//! # Axum Helpers
//!
//! Utilities shared by the HTTP services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup, health checks, graceful shutdown
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: JSON extractors that reject with 400
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, info_router, run_health_checks,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{JsonBody, ValidatedJson};
