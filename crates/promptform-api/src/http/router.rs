//! Axum router configuration with middleware.
//!
//! The JSON API lives under `/api/v1/`; the HTML forms are served from
//! `/` and `/forms/{preset}`. Middleware: CORS, request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/presets", get(handlers::generate::list_presets))
        .route("/generate/{preset}", post(handlers::generate::generate));

    Router::new()
        .route("/", get(handlers::form::index))
        .route(
            "/forms/{preset}",
            get(handlers::form::show_form).post(handlers::form::submit_form),
        )
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
