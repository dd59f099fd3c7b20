use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    // Build database URL from environment variables
    let database_url = db_url(profile, owner)?;

    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}

/// Connect to an in-memory SQLite database (test harness backend).
///
/// The pool is capped at a single connection: every pooled connection to
/// `sqlite::memory:` opens its own empty database, so a larger pool would
/// scatter the schema across invisible siblings.
pub async fn connect_sqlite_memory() -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);

    let conn = Database::connect(opts).await?;
    Ok(conn)
}
