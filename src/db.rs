//! PostgreSQL access layer for the movies table.
//!
//! `MovieStore` wraps a deadpool-postgres connection pool with the three
//! operations the application needs: a health-check ping, an ordered
//! fetch-all, and a single-row insert. Connections are acquired from the
//! pool per operation and returned when the guard drops.
//!
//! The store is constructed explicitly at startup and closed explicitly at
//! shutdown; no global pool state exists.

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use serde::Serialize;
use tokio_postgres::NoTls;

use crate::config::DatabaseConfig;
use crate::error::AppError;

/// A row of the movies table as rendered on the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub name: String,
    pub release_year: i32,
}

/// A validated record ready for insertion. Produced by the HTTP boundary
/// after form validation; the raw form string never reaches this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub name: String,
    pub release_year: i32,
}

/// Connection-pooled access to the movies table, cloneable across handlers.
#[derive(Clone)]
pub struct MovieStore {
    pool: Pool,
}

impl MovieStore {
    /// Build the connection pool from configuration.
    ///
    /// The pool is constructed lazily: no connection is attempted here, so
    /// startup succeeds even when the database is unreachable. Each
    /// operation degrades individually instead.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut pg = tokio_postgres::Config::new();
        pg.host(&config.host)
            .user(&config.user)
            .password(&config.password)
            .dbname(&config.dbname)
            .port(config.port);

        let manager = Manager::from_config(
            pg,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let mut builder = Pool::builder(manager);
        if let Some(size) = config.pool_size {
            builder = builder.max_size(size);
        }
        let pool = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build connection pool: {e}")))?;

        Ok(Self { pool })
    }

    /// Trivial round-trip query to verify database connectivity.
    ///
    /// Used once per page render to populate the status line. It never gates
    /// the fetch or insert operations.
    pub async fn ping(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT NOW()", &[]).await?;
        Ok(())
    }

    /// Fetch every movie, ordered ascending by release year.
    ///
    /// Degrades to an empty list on any failure; callers cannot distinguish
    /// an empty table from an unreachable database. The error is logged here.
    pub async fn list_movies(&self) -> Vec<Movie> {
        match self.try_list_movies().await {
            Ok(movies) => movies,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching movies");
                Vec::new()
            }
        }
    }

    async fn try_list_movies(&self) -> Result<Vec<Movie>, AppError> {
        let client = self.pool.get().await?;
        let rows = client
            .query(
                "SELECT name, release_year FROM movies ORDER BY release_year ASC",
                &[],
            )
            .await?;

        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            movies.push(Movie {
                name: row.try_get(0)?,
                release_year: row.try_get(1)?,
            });
        }
        Ok(movies)
    }

    /// Insert a single movie. Duplicates are permitted; the table carries no
    /// uniqueness constraint.
    pub async fn insert_movie(&self, movie: &NewMovie) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client
            .execute(
                "INSERT INTO movies (name, release_year) VALUES ($1, $2)",
                &[&movie.name, &movie.release_year],
            )
            .await?;
        Ok(())
    }

    /// Close the pool, dropping all idle connections. Called after the HTTP
    /// server has drained.
    pub fn close(&self) {
        self.pool.close();
    }
}
