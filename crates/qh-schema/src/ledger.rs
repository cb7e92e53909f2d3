//! Migration ledger.
//!
//! Records each applied unit by name in `schema_migrations`. The ledger is
//! the runner's primary applied-check; each unit's artifact probe remains
//! the safety net for stores that were migrated before the ledger existed.

use crate::error::{SchemaError, SchemaResult};
use qh_db::{DatabaseAdapter, Value};

pub const LEDGER_TABLE: &str = "schema_migrations";

fn ledger_err(source: qh_db::DbError) -> SchemaError {
    SchemaError::Ledger { source }
}

/// Create the ledger table if it is absent.
pub fn ensure_ledger(db: &dyn DatabaseAdapter) -> SchemaResult<()> {
    let d = db.dialect();
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {LEDGER_TABLE} (\
            name VARCHAR(100) PRIMARY KEY, \
            applied_at {} NOT NULL DEFAULT {}\
        )",
        d.timestamp_type(),
        d.timestamp_default()
    );
    match db.execute(&sql, &[]) {
        Ok(_) => Ok(()),
        Err(e) if e.is_duplicate_artifact() => Ok(()),
        Err(source) => Err(ledger_err(source)),
    }
}

/// Whether `name` has been recorded as applied.
pub fn is_recorded(db: &dyn DatabaseAdapter, name: &str) -> SchemaResult<bool> {
    let d = db.dialect();
    let sql = format!(
        "SELECT COUNT(*) FROM {LEDGER_TABLE} WHERE name = {}",
        d.placeholder(1)
    );
    let n = db
        .query_i64(&sql, &[Value::from(name)])
        .map_err(ledger_err)?;
    Ok(n > 0)
}

/// Record `name` as applied. Losing a record race is fine: the insert is
/// keyed on the primary key and ignores conflicts.
pub fn record(db: &dyn DatabaseAdapter, name: &str) -> SchemaResult<()> {
    let sql = db.dialect().insert_ignore(LEDGER_TABLE, &["name"], "name");
    match db.execute(&sql, &[Value::from(name)]) {
        Ok(_) => Ok(()),
        Err(e) if e.is_unique_violation() => Ok(()),
        Err(source) => Err(ledger_err(source)),
    }
}

/// Remove the record for `name` after a reversal.
pub fn erase(db: &dyn DatabaseAdapter, name: &str) -> SchemaResult<()> {
    let d = db.dialect();
    let sql = format!(
        "DELETE FROM {LEDGER_TABLE} WHERE name = {}",
        d.placeholder(1)
    );
    db.execute(&sql, &[Value::from(name)]).map_err(ledger_err)?;
    Ok(())
}

/// When `name` was recorded, if ever.
pub fn applied_at(db: &dyn DatabaseAdapter, name: &str) -> SchemaResult<Option<String>> {
    let d = db.dialect();
    let sql = format!(
        "SELECT applied_at FROM {LEDGER_TABLE} WHERE name = {}",
        d.placeholder(1)
    );
    let row = db
        .query_one(&sql, &[Value::from(name)])
        .map_err(ledger_err)?;
    Ok(row.and_then(|r| r.get(0).and_then(|v| v.as_str().map(str::to_string))))
}
