//! Handler for movie form submissions.
//!
//! The form arrives URL-encoded with `name` and `release_year` as raw
//! strings. Input is validated here, at the HTTP boundary, into a typed
//! `NewMovie` before it reaches the data-access layer: the name must be
//! non-empty and the release year must be an integer. Validation failures
//! return 400; an insert that fails against the database still renders the
//! confirmation page, reporting the failure in the message.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::instrument;

use crate::config::{MSG_INSERT_FAILED, MSG_INSERT_OK};
use crate::db::NewMovie;
use crate::error::AppError;
use crate::state::AppState;

/// Form data for adding a movie.
#[derive(Debug, Deserialize)]
pub struct MovieForm {
    pub name: String,
    /// Arrives as a string from form decoding; validated into an i32
    pub release_year: String,
}

/// Validate the raw form into a typed record.
fn validate_form(form: &MovieForm) -> Result<NewMovie, AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }

    let release_year: i32 = form.release_year.trim().parse().map_err(|_| {
        AppError::Validation(format!(
            "release_year must be an integer, got {:?}",
            form.release_year
        ))
    })?;

    Ok(NewMovie {
        name: name.to_string(),
        release_year,
    })
}

/// Handler for submitting a new movie.
#[instrument(name = "movies::submit", skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<MovieForm>,
) -> Result<Html<String>, AppError> {
    let movie = validate_form(&form)?;

    let message = match state.store.insert_movie(&movie).await {
        Ok(()) => {
            tracing::info!(name = %movie.name, release_year = movie.release_year, "Movie inserted");
            MSG_INSERT_OK
        }
        Err(e) => {
            tracing::error!(error = %e, "Error inserting movie");
            MSG_INSERT_FAILED
        }
    };

    let mut context = tera::Context::new();
    context.insert("message", message);

    let html = state.tera.render("submitted.html", &context)?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, release_year: &str) -> MovieForm {
        MovieForm {
            name: name.to_string(),
            release_year: release_year.to_string(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let movie = validate_form(&form("Inception", "2010")).unwrap();
        assert_eq!(movie.name, "Inception");
        assert_eq!(movie.release_year, 2010);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let movie = validate_form(&form("  Alien ", " 1979 ")).unwrap();
        assert_eq!(movie.name, "Alien");
        assert_eq!(movie.release_year, 1979);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            validate_form(&form("   ", "2010")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_year() {
        assert!(matches!(
            validate_form(&form("Inception", "twenty-ten")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_fractional_year() {
        assert!(matches!(
            validate_form(&form("Inception", "2010.5")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn accepts_negative_year() {
        // The column is a plain INTEGER; no range policy is applied here
        let movie = validate_form(&form("Cave Paintings", "-30000")).unwrap();
        assert_eq!(movie.release_year, -30000);
    }
}
