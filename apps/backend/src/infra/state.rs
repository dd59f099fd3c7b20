use migration::{Migrator, MigratorTrait};

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::{connect_db, connect_sqlite_memory};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Database target for state construction.
enum DbTarget {
    /// Postgres, resolved from environment variables for the given profile.
    Postgres(DbProfile),
    /// Fresh in-memory SQLite with migrations applied (test harness).
    SqliteMemory,
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    target: Option<DbTarget>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            target: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.target = Some(DbTarget::Postgres(profile));
        self
    }

    /// Use a fresh in-memory SQLite database, with the full migration set
    /// applied. Intended for tests; each built state gets its own database.
    pub fn with_sqlite_memory(mut self) -> Self {
        self.target = Some(DbTarget::SqliteMemory);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = match self.target {
            Some(DbTarget::Postgres(profile)) => {
                // Migrations are applied out-of-band by the migration CLI;
                // the app connects with restricted credentials.
                connect_db(profile, DbOwner::App).await?
            }
            Some(DbTarget::SqliteMemory) => {
                let conn = connect_sqlite_memory().await?;
                Migrator::up(&conn, None).await?;
                conn
            }
            None => {
                return Err(AppError::config(
                    "StateBuilder requires a database target (with_db or with_sqlite_memory)",
                ))
            }
        };

        Ok(AppState::new(conn, self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_without_target_is_config_error() {
        let err = build_state().build().await.unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[tokio::test]
    async fn test_build_sqlite_memory_runs_migrations() {
        let state = build_state().with_sqlite_memory().build().await.unwrap();

        // Migrated schema is queryable
        use sea_orm::{ConnectionTrait, Statement};
        let res = state
            .db
            .query_one(Statement::from_string(
                sea_orm::DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM players".to_string(),
            ))
            .await
            .unwrap();
        assert!(res.is_some());
    }
}
