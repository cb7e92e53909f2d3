//! Error types for the migration engine.
//!
//! Duplicate-artifact and seed-conflict faults never appear here: those are
//! recovered locally by the units and the seed loader. Everything else
//! aborts the run.

use qh_db::DbError;
use thiserror::Error;

/// Migration engine errors.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A migration unit's statement was rejected (M001).
    #[error("[M001] Migration unit '{unit}' failed: {source}")]
    UnitFailed {
        unit: &'static str,
        #[source]
        source: DbError,
    },

    /// Catalog introspection failed (M002). Always propagated — the engine
    /// cannot safely decide whether to apply without it.
    #[error("[M002] Schema introspection failed for {table}: {source}")]
    Introspection {
        table: String,
        #[source]
        source: DbError,
    },

    /// Seeding reference data failed (M003).
    #[error("[M003] Seeding {table} failed: {source}")]
    Seed {
        table: String,
        #[source]
        source: DbError,
    },

    /// Migration ledger access failed (M004).
    #[error("[M004] Migration ledger access failed: {source}")]
    Ledger {
        #[source]
        source: DbError,
    },

    /// Rollback was requested for a unit that is not registered (M005).
    #[error("[M005] Unknown migration unit '{0}'")]
    UnknownUnit(String),

    /// The injected secret-hashing collaborator failed (M006).
    #[error("[M006] Secret hashing failed: {0}")]
    SecretHash(String),
}

/// Result type alias for [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;
