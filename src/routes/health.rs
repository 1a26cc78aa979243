//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Database connectivity is deliberately not checked here; the
//! application serves a degraded page when the database is down, so the
//! process stays "alive" regardless.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
