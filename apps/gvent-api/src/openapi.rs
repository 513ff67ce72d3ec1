//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gvent API",
        description = "REST API for managing calendar events",
        license(name = "Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for all APIs
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.info.version = env!("CARGO_PKG_VERSION").to_string();
        doc.merge(domain_events::ApiDoc::openapi());
        doc
    }
}
