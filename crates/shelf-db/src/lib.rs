//! # shelf-db
//!
//! libSQL schema and repository layer for the gameshelf data model.
//!
//! Declares the four tables (`users`, `games`, `reviews`, `game_users`),
//! hydrates rows into the `shelf-core` entities, and implements the
//! lifecycle rules as explicit repository operations: server-assigned
//! timestamps, engine-enforced referential integrity, and object-level
//! cascade deletes (deleting a user or game first deletes its reviews and
//! membership rows).
//!
//! Uses the `libsql` crate (C `SQLite` fork) as the embedded engine.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod schema;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use shelf_config::ShelfConfig;

/// Central database handle for all gameshelf state operations.
///
/// Wraps a libSQL database and connection. Repository methods are
/// implemented on this type in [`repos`].
pub struct ShelfDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ShelfDb {
    /// Open a local database at the given path (`":memory:"` for a
    /// throwaway in-memory database).
    ///
    /// Enables foreign-key enforcement and runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let shelf_db = Self { db, conn };
        shelf_db.run_migrations().await?;
        Ok(shelf_db)
    }

    /// Open the database at the path named by the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_configured(config: &ShelfConfig) -> Result<Self, DatabaseError> {
        Self::open_local(&config.database.path).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in &crate::schema::TABLES {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced_per_connection() {
        let db = test_db().await;

        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn open_configured_uses_database_path() {
        let config = ShelfConfig {
            database: shelf_config::DatabaseConfig {
                path: ":memory:".into(),
            },
            ..Default::default()
        };
        let db = ShelfDb::open_configured(&config).await.unwrap();

        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='users'",
                (),
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }
}
