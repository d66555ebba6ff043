//! Database connection management.
//!
//! The store serializes every operation on one SQLite connection, so the pool
//! is capped at a single connection. The file is created when missing and WAL
//! mode is enabled.

use std::path::Path;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Opens the SQLite file at `db_path`, creating it if it doesn't exist.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns the `sqlx::Error` raised while opening the first connection.
pub async fn open_pool(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if db_path.exists() {
        info!("Database file already exists: {}", db_path.display());
    } else {
        info!("Creating database file: {}", db_path.display());
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database {}: {e}", db_path.display());
            e
        })
}
