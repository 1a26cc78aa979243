//! Marquee: a web interface to a movies database.
//!
//! A single-page web application backed by PostgreSQL. GET renders the movie
//! list with an add-movie form; POST validates the submission and inserts a
//! row. Database failures degrade to status messages on the rendered page
//! rather than HTTP errors.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::AppError;
