use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::error::CoreError;

// Re-export the pool for use in other parts of the core crate
pub use sqlx::SqlitePool as DbPool;

/// Opens the SQLite database at `db_path` and brings its schema up to date.
///
/// Missing parent directories and the database file itself are created.
/// The returned pool is the only handle to the database; close it with
/// [`DbPool::close`] when the process shuts down.
pub async fn establish_connection(db_path: &str) -> Result<DbPool, CoreError> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    if Path::new(db_path).exists() {
        tracing::info!(path = db_path, "using existing database file");
    } else {
        tracing::info!(path = db_path, "database file does not exist, creating a new one");
    }

    let options = SqliteConnectOptions::from_str(db_path)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
