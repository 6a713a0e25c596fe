//! Database error types for shelf-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A primary-key, uniqueness, or foreign-key constraint rejected the
    /// statement.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Classify an engine error from a mutating statement.
    ///
    /// `SQLite` reports every primary-key, uniqueness, and foreign-key
    /// violation with a "... constraint failed" diagnostic; those become
    /// [`DatabaseError::Constraint`] so callers can tell a rejected write
    /// from an engine failure.
    pub(crate) fn from_engine(e: libsql::Error) -> Self {
        let msg = e.to_string();
        if msg.contains("constraint failed") {
            Self::Constraint(msg)
        } else {
            Self::LibSql(e)
        }
    }
}
