//! API Routes
//!
//! Configures the Axum router with all page cache endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, get_handler, health_handler, insert_handler, limits_handler, remove_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /page` - Cache a page
/// - `GET /page?url=` - Look up a page
/// - `DELETE /page?url=` - Remove a page
/// - `DELETE /pages` - Clear the cache
/// - `GET /stats` - Size and count counters with current limits
/// - `PUT /limits` - Change limits at runtime
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/page",
            put(insert_handler).get(get_handler).delete(remove_handler),
        )
        .route("/pages", delete(clear_handler))
        .route("/stats", get(stats_handler))
        .route("/limits", put(limits_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
