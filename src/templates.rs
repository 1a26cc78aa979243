use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine.
///
/// Templates are HTML-escaped by Tera, so user-supplied movie names render
/// safely on the list page.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Movie;

    fn render_home(movies: &[Movie], db_status: &str) -> String {
        let tera = init_templates().expect("templates load");
        let mut context = tera::Context::new();
        context.insert("site_name", "testhost");
        context.insert("db_status", db_status);
        context.insert("movies", movies);
        tera.render("home.html", &context).expect("home renders")
    }

    #[test]
    fn home_with_empty_table_renders_empty_list() {
        let html = render_home(&[], "DB connected successfully");
        assert!(html.contains("DB connected successfully"));
        assert!(html.contains("<ul></ul>"));
        assert!(html.contains("Add a new movie"));
    }

    #[test]
    fn home_renders_movie_entries_in_order() {
        let movies = vec![
            Movie {
                name: "Memento".to_string(),
                release_year: 2000,
            },
            Movie {
                name: "Inception".to_string(),
                release_year: 2010,
            },
        ];
        let html = render_home(&movies, "DB connected successfully");
        assert!(html.contains("<li>Memento (Released: 2000)</li>"));
        assert!(html.contains("<li>Inception (Released: 2010)</li>"));

        let memento = html.find("Memento").unwrap();
        let inception = html.find("Inception").unwrap();
        assert!(memento < inception);
    }

    #[test]
    fn home_escapes_movie_names() {
        let movies = vec![Movie {
            name: "<script>alert(1)</script>".to_string(),
            release_year: 1999,
        }];
        let html = render_home(&movies, "DB connected successfully");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn home_carries_form_fields() {
        let html = render_home(&[], "Failed to connect to DB");
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"name="release_year""#));
        assert!(html.contains(r#"method="POST""#));
    }

    #[test]
    fn submitted_page_has_message_and_back_link() {
        let tera = init_templates().expect("templates load");
        let mut context = tera::Context::new();
        context.insert("message", "Movie inserted successfully");
        let html = tera
            .render("submitted.html", &context)
            .expect("submitted renders");
        assert!(html.contains("Movie inserted successfully"));
        assert!(html.contains(r#"<a href="/">Go Back</a>"#));
    }
}
