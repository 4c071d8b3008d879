pub mod models;
pub mod query_builder;
pub mod repository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the connection pool from DATABASE_URL. Constructed once in `main`
/// and handed down by value; nothing in this crate reaches for a global pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let url = std::env::var("DATABASE_URL")
        .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&url)
        .await?;

    info!("Created database pool (max_connections={})", config.max_connections);
    Ok(pool)
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
