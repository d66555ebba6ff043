// storage/schema.rs
// Table definition for contacts

use log::debug;
use sqlx::SqlitePool;

/// DDL for the single `contacts` table. `created_at` is filled by SQLite.
pub const CREATE_CONTACTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    city TEXT,
    country TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Creates the `contacts` table if it doesn't exist.
pub async fn create_contacts_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CONTACTS_TABLE).execute(pool).await?;
    debug!("Table 'contacts' created or already exists");
    Ok(())
}
