//! Server infrastructure module.
//!
//! - Router setup with OpenAPI documentation
//! - Health, readiness and service banner endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_production_app(app, &server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, info_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
