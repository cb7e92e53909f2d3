//! Live-schema introspection.
//!
//! Answers "does this table/column exist?" from the store's own catalog.
//! False negatives are safe (the caller attempts creation and tolerates a
//! duplicate fault); false positives must never occur, so every query
//! matches catalog names exactly. A failed catalog query always propagates.

use crate::error::{SchemaError, SchemaResult};
use qh_db::{DatabaseAdapter, Dialect, Value};

/// Catalog reader over the active connection. No side effects.
pub struct Introspector<'a> {
    db: &'a dyn DatabaseAdapter,
}

impl<'a> Introspector<'a> {
    pub fn new(db: &'a dyn DatabaseAdapter) -> Self {
        Self { db }
    }

    /// Whether `table` exists.
    pub fn has_table(&self, table: &str) -> SchemaResult<bool> {
        let sql = match self.db.dialect() {
            Dialect::Sqlite => {
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1"
            }
            Dialect::Postgres => {
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = 'public' AND table_name = $1"
            }
        };
        self.count(sql, &[Value::from(table)], table)
    }

    /// Whether `table` has `column`. A missing table reports false.
    pub fn has_column(&self, table: &str, column: &str) -> SchemaResult<bool> {
        let sql = match self.db.dialect() {
            Dialect::Sqlite => "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
            Dialect::Postgres => {
                "SELECT COUNT(*) FROM information_schema.columns \
                 WHERE table_schema = 'public' AND table_name = $1 AND column_name = $2"
            }
        };
        self.count(sql, &[Value::from(table), Value::from(column)], table)
    }

    /// Whether `table` carries the named constraint.
    ///
    /// Named constraints exist only on the server dialect; the embedded
    /// store always reports false.
    pub fn has_constraint(&self, table: &str, constraint: &str) -> SchemaResult<bool> {
        match self.db.dialect() {
            Dialect::Sqlite => Ok(false),
            Dialect::Postgres => {
                let sql = "SELECT COUNT(*) FROM information_schema.table_constraints \
                           WHERE table_schema = 'public' AND table_name = $1 \
                           AND constraint_name = $2";
                self.count(sql, &[Value::from(table), Value::from(constraint)], table)
            }
        }
    }

    fn count(&self, sql: &str, params: &[Value], table: &str) -> SchemaResult<bool> {
        let n = self
            .db
            .query_i64(sql, params)
            .map_err(|source| SchemaError::Introspection {
                table: table.to_string(),
                source,
            })?;
        Ok(n > 0)
    }
}

#[cfg(test)]
#[path = "introspect_test.rs"]
mod tests;
