//! Seed data loader.
//!
//! Inserts fixed reference rows at most once, however many times the engine
//! runs. Idempotency comes from an emptiness/absence check first; catching
//! the unique-key fault is only the safety net for concurrent first boots.

use crate::error::{SchemaError, SchemaResult};
use qh_db::{DatabaseAdapter, Value};

/// Insert `rows` into `table` only if the table currently has no rows.
///
/// Returns true when the seed ran. A unique-key fault from a racing
/// instance is treated as "already seeded" and never surfaced.
pub fn seed_if_empty(
    db: &dyn DatabaseAdapter,
    table: &str,
    columns: &[&str],
    rows: &[Vec<Value>],
) -> SchemaResult<bool> {
    let count = db
        .query_i64(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .map_err(|source| seed_err(table, source))?;
    if count > 0 {
        log::debug!("{table} already has {count} rows, skipping seed");
        return Ok(false);
    }

    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        columns.join(", "),
        db.dialect().placeholders(columns.len())
    );
    for row in rows {
        match db.execute(&sql, row) {
            Ok(_) => {}
            Err(e) if e.is_unique_violation() => {
                log::warn!("{table} seed row already present, treating as seeded: {e}");
            }
            Err(source) => return Err(seed_err(table, source)),
        }
    }
    log::info!("seeded {} rows into {table}", rows.len());
    Ok(true)
}

/// Insert each row unless a row with its key already exists.
///
/// Used for per-level reward rows: partial prior seeding is completed
/// without disturbing existing rows, including operator-edited values.
/// Returns the number of rows actually inserted.
pub fn seed_if_absent_by_key(
    db: &dyn DatabaseAdapter,
    table: &str,
    key: &str,
    columns: &[&str],
    rows: &[Vec<Value>],
) -> SchemaResult<usize> {
    let sql = db.dialect().insert_ignore(table, columns, key);
    let mut inserted = 0;
    for row in rows {
        match db.execute(&sql, row) {
            Ok(n) => inserted += n,
            // A racing writer inserted the key between our statement's
            // conflict check and the write; same end state.
            Err(e) if e.is_unique_violation() => {}
            Err(source) => return Err(seed_err(table, source)),
        }
    }
    if inserted > 0 {
        log::info!("seeded {inserted} missing rows into {table}");
    }
    Ok(inserted)
}

fn seed_err(table: &str, source: qh_db::DbError) -> SchemaError {
    SchemaError::Seed {
        table: table.to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
