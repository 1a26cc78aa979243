//! Handler for the movie list page.
//!
//! Renders the database status line, the add-movie form, and the full movie
//! list ordered by release year. Both the health check and the fetch degrade
//! gracefully: an unreachable database yields a "Failed to connect" status
//! and an empty list over HTTP 200, never a server error.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::config::{STATUS_DB_CONNECTED, STATUS_DB_UNREACHABLE};
use crate::error::AppError;
use crate::state::AppState;

/// Movie list page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    // Status line only; fetch proceeds regardless of the outcome
    let db_status = match state.store.ping().await {
        Ok(()) => STATUS_DB_CONNECTED,
        Err(e) => {
            tracing::error!(error = %e, "Error connecting to the database");
            STATUS_DB_UNREACHABLE
        }
    };

    let movies = state.store.list_movies().await;

    let site_name = state
        .config
        .ui
        .site_name
        .as_deref()
        .unwrap_or(env!("CARGO_PKG_NAME"));

    let mut context = tera::Context::new();
    context.insert("site_name", site_name);
    context.insert("db_status", db_status);
    context.insert("movies", &movies);

    let html = state.tera.render("home.html", &context)?;
    Ok(Html(html))
}
