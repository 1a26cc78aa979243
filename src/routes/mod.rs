//! HTTP route handlers for the web interface.
//!
//! The movie list page lives at `/` and handles both GET (render) and POST
//! (form submission). A `/health` liveness probe is provided for container
//! orchestration. Every response carries a `Server` header; the list page is
//! marked `no-store` because it reflects live database state.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod home;
pub mod movies;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL, SERVER};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, SERVER_HEADER};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and response headers.
pub fn create_router(state: AppState) -> Router {
    // Movie list page - GET renders, POST inserts. Never cached upstream.
    let movie_routes = Router::new()
        .route("/", get(home::index).post(movies::submit))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Health check - liveness probe, no database round-trip
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(movie_routes)
        .merge(health_routes)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            SERVER,
            HeaderValue::from_static(SERVER_HEADER),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
