//! Error types for qh-db

use crate::dialect::Dialect;
use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement rejected by the store (D002)
    #[error("[D002] SQL execution failed ({dialect}): {message}; statement: {sql}")]
    Statement {
        dialect: Dialect,
        sql: String,
        message: String,
    },

    /// Column/table/index/constraint already exists (D003).
    ///
    /// Callers treat this as already-applied; it is the safety net for
    /// concurrent first-boot races, never a startup failure.
    #[error("[D003] Schema artifact already exists ({dialect}): {message}")]
    DuplicateArtifact { dialect: Dialect, message: String },

    /// Unique-key violation on insert (D004)
    #[error("[D004] Unique constraint violated: {message}")]
    UniqueViolation { message: String },

    /// Mutex poisoned (D005)
    #[error("[D005] Database mutex poisoned: {0}")]
    MutexPoisoned(String),

    /// Internal error (D006)
    #[error("[D006] Internal database error: {0}")]
    Internal(String),
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// True for faults that mean the artifact was already created by a
    /// prior (or racing) run.
    pub fn is_duplicate_artifact(&self) -> bool {
        matches!(self, DbError::DuplicateArtifact { .. })
    }

    /// True for unique-key conflicts, used by the seed loader to treat a
    /// losing insert race as "already seeded".
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation { .. })
    }
}
