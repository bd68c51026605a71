//! Router construction for the colour API.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Build the full axum router with all routes and middleware.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/colours", get(handlers::list_colours))
        .route("/api/colours/options", get(handlers::colour_options))
        .route("/api/colours/checkboxes", get(handlers::colour_checkboxes))
        .route("/api/colours/lookup", get(handlers::lookup_colour))
        .route(
            "/api/colours/form",
            get(handlers::colour_form).post(handlers::submit_colour_form),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}
