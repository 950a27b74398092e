//! Nomen API - HTTP server
//!
//! Exposes surname extraction over HTTP.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use routes::create_router;
#[cfg(any(test, feature = "test-utils"))]
pub use testing::create_router_for_testing;

use utoipa::OpenApi;

/// OpenAPI document for the public endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::extract::extract_handler,
        handlers::health::health_check,
        handlers::health::metrics
    ),
    components(schemas(
        handlers::extract::ExtractRequest,
        handlers::extract::ExtractResponse,
        handlers::health::HealthResponse,
        handlers::health::MetricsResponse,
        error::ErrorResponse
    )),
    tags(
        (name = "extract", description = "Surname extraction"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
