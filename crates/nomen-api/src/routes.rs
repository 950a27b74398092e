//! API route definitions
//!
//! Author: hephaex@gmail.com

use crate::handlers::{extract, health};
use crate::state::AppState;
use crate::ApiDoc;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Create extraction routes, mounted under `/api`
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Name of the deployed function
        .route("/get_nom_famille", post(extract::extract_handler))
        .route("/v1/extract", post(extract::extract_handler))
}

/// Create the full application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_size = state.config.server.max_body_size;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
