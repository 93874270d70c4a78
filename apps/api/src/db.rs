use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool.
///
/// The pool connects lazily: the service starts even when the database is
/// unreachable, and only requests that persist an analysis will fail.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_lazy(database_url)?;

    info!("PostgreSQL connection pool configured (lazy connect)");
    Ok(pool)
}
