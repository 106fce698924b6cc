//! Router assembly.

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{file, health};
use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/files", get(file::list_files))
        .route("/files", post(file::create_file))
        .route("/files/mine", get(file::list_my_files))
        .route("/files/{id}", get(file::get_file))
        .route("/files/{id}", put(file::save_file))
        .route("/files/{id}", delete(file::delete_file))
        .route("/files/{id}/versions", get(file::list_versions))
        .route("/files/{id}/force", put(file::force_update_file));

    Router::new()
        .nest("/api", api)
        .layer(build_cors_layer(&state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS layer driven by the configured allowed origins. A literal `*`
/// entry enables the permissive wildcard mode.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}
