use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Creates the process-wide connection pool from application config.
///
/// The pool is lazy: no connection is opened until the first query, which at
/// boot is the schema initialization in `startup`.
pub fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    tracing::info!(
        database_url = %config.url,
        max_connections = config.max_connections,
        "Creating SQLite connection pool"
    );

    Ok(SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}
