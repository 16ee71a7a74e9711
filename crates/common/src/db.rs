//! Database pool and embedded schema migrations
//!
//! The pool is the only state shared between requests. Each repository call
//! checks a connection out for a single statement and the guard returns it
//! to the pool when the call finishes, successfully or not.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

/// How long a request waits for a free pooled connection
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the PostgreSQL connection pool described by `config`
#[mutants::skip] // Requires a live database
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await
}

/// Apply the migrations embedded from the workspace `migrations/` directory
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
