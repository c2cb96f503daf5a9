//! HTTP route definitions.

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers::{liveness_probe, run_agent};
use crate::state::AppState;

/// Create the gateway router.
///
/// ```text
/// POST /agents/{agent_name}/run - Run an agent
/// GET  /livez                   - Liveness probe
/// ```
pub fn create_router(state: AppState) -> Router {
    let agent_routes = Router::new()
        .route("/{agent_name}/run", post(run_agent))
        .with_state(state);

    Router::new()
        .nest("/agents", agent_routes)
        .route("/livez", get(liveness_probe))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Browsers on any origin may call the API with credentials.
///
/// A wildcard origin cannot be combined with credentials, so the request
/// origin and headers are mirrored back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
