//! Tests for catalog introspection on the embedded dialect.

use crate::introspect::Introspector;
use qh_db::{DatabaseAdapter, SqliteAdapter};

fn db() -> SqliteAdapter {
    let db = SqliteAdapter::in_memory().unwrap();
    db.execute_batch("CREATE TABLE hives (id INTEGER PRIMARY KEY, label TEXT)")
        .unwrap();
    db
}

#[test]
fn has_table_finds_existing() {
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(introspector.has_table("hives").unwrap());
}

#[test]
fn has_table_misses_absent() {
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(!introspector.has_table("wasps").unwrap());
}

#[test]
fn has_column_finds_existing() {
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(introspector.has_column("hives", "label").unwrap());
}

#[test]
fn has_column_misses_absent_column() {
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(!introspector.has_column("hives", "nectar").unwrap());
}

#[test]
fn has_column_on_missing_table_is_false() {
    // A missing table must read as "not present", never as an error: the
    // caller is about to create it.
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(!introspector.has_column("wasps", "sting").unwrap());
}

#[test]
fn named_constraints_never_reported_on_embedded_dialect() {
    let db = db();
    let introspector = Introspector::new(&db);
    assert!(!introspector.has_constraint("hives", "fk_hives_label").unwrap());
}
