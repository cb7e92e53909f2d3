//! Migration units.
//!
//! Each unit is a named, ordered, self-contained schema change with three
//! operations: apply (idempotent forward), reverse (dependency-safe drop),
//! and an artifact probe. Units compose all DDL from dialect primitives and
//! touch the store only through the adapter.

pub mod core_game;
pub mod level_honey;
pub mod multi_user;
pub mod player_identity;
pub mod session_links;

pub use core_game::CoreGameSchema;
pub use level_honey::LevelHoneyConfig;
pub use multi_user::MultiUserSchema;
pub use player_identity::PlayerIdentities;
pub use session_links::SessionConfigLinks;

use crate::error::{SchemaError, SchemaResult};
use crate::hasher::SecretHasher;
use crate::introspect::Introspector;
use qh_db::DatabaseAdapter;
use std::sync::Arc;

/// A named, ordered, idempotent schema change.
pub trait MigrationUnit: Send + Sync {
    /// Stable unit name, used in the ledger and for operator rollback.
    fn name(&self) -> &'static str;

    /// Artifact probe: true only when a prior run observably created this
    /// unit's artifacts. False negatives are safe; false positives are not.
    fn is_applied(&self, db: &dyn DatabaseAdapter) -> SchemaResult<bool>;

    /// Idempotent forward change.
    fn apply(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()>;

    /// Drops what `apply` added, dependents first.
    fn reverse(&self, db: &dyn DatabaseAdapter) -> SchemaResult<()>;
}

/// All units in required application order. Each depends on artifacts of
/// the previous ones; the runner never reorders them.
pub fn all_units(hasher: Arc<dyn SecretHasher>) -> Vec<Box<dyn MigrationUnit>> {
    vec![
        Box::new(CoreGameSchema),
        Box::new(MultiUserSchema::new(hasher)),
        Box::new(SessionConfigLinks),
        Box::new(PlayerIdentities),
        Box::new(LevelHoneyConfig),
    ]
}

/// Execute one DDL statement for `unit`, treating a duplicate-artifact
/// fault as already-applied. That fault only happens when another instance
/// won a first-boot race; the end state is the same.
pub(crate) fn exec_ddl(
    unit: &'static str,
    db: &dyn DatabaseAdapter,
    sql: &str,
) -> SchemaResult<()> {
    match db.execute(sql, &[]) {
        Ok(_) => Ok(()),
        Err(e) if e.is_duplicate_artifact() => {
            log::debug!("[{unit}] artifact already exists, treating as applied: {e}");
            Ok(())
        }
        Err(source) => Err(SchemaError::UnitFailed { unit, source }),
    }
}

/// Add a column only when introspection says it is absent.
pub(crate) fn add_column_if_missing(
    unit: &'static str,
    db: &dyn DatabaseAdapter,
    table: &str,
    column: &str,
    decl: &str,
) -> SchemaResult<()> {
    if Introspector::new(db).has_column(table, column)? {
        log::debug!("[{unit}] column {table}.{column} already present");
        return Ok(());
    }
    exec_ddl(
        unit,
        db,
        &format!("ALTER TABLE {table} ADD COLUMN {column} {decl}"),
    )
}

/// Drop a column only when it is present.
pub(crate) fn drop_column_if_present(
    unit: &'static str,
    db: &dyn DatabaseAdapter,
    table: &str,
    column: &str,
) -> SchemaResult<()> {
    if !Introspector::new(db).has_column(table, column)? {
        return Ok(());
    }
    exec_ddl(
        unit,
        db,
        &format!("ALTER TABLE {table} DROP COLUMN {column}"),
    )
}

/// Add a named foreign-key constraint on the server dialect. The embedded
/// dialect does not enforce named constraints, so this is a no-op there.
pub(crate) fn add_foreign_key(
    unit: &'static str,
    db: &dyn DatabaseAdapter,
    table: &str,
    constraint: &str,
    column: &str,
    references: &str,
    on_delete: &str,
) -> SchemaResult<()> {
    if !db.dialect().supports_named_constraints() {
        return Ok(());
    }
    exec_ddl(
        unit,
        db,
        &format!(
            "ALTER TABLE {table} ADD CONSTRAINT {constraint} \
             FOREIGN KEY ({column}) REFERENCES {references} ON DELETE {on_delete}"
        ),
    )
}

/// Drop a named constraint with IF EXISTS semantics (server dialect only).
pub(crate) fn drop_constraint_if_exists(
    unit: &'static str,
    db: &dyn DatabaseAdapter,
    table: &str,
    constraint: &str,
) -> SchemaResult<()> {
    if !db.dialect().supports_named_constraints() {
        return Ok(());
    }
    exec_ddl(
        unit,
        db,
        &format!("ALTER TABLE {table} DROP CONSTRAINT IF EXISTS {constraint}"),
    )
}
