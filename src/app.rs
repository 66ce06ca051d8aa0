use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{list_all_documents, list_documents};
use crate::models::AppState;

/// Every origin, method and header is mirrored back, with credentials.
/// A wildcard cannot be combined with credentials, hence the mirroring.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/documents", get(list_documents))
        .route("/api/documents/all", get(list_all_documents))
        .layer(TraceLayer::new_for_http())
        .layer(permissive_cors())
        .with_state(state)
}
