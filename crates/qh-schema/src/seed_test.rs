//! Tests for the seed data loader.

use crate::seed::{seed_if_absent_by_key, seed_if_empty};
use qh_db::{DatabaseAdapter, SqliteAdapter, Value};

fn db() -> SqliteAdapter {
    SqliteAdapter::in_memory().unwrap()
}

fn count(db: &dyn DatabaseAdapter, sql: &str) -> i64 {
    db.query_i64(sql, &[]).unwrap()
}

fn category_rows() -> Vec<Vec<Value>> {
    vec![
        vec![Value::from("alpha"), Value::from("#111111")],
        vec![Value::from("beta"), Value::from("#222222")],
    ]
}

#[test]
fn seed_if_empty_populates_fresh_table() {
    let db = db();
    db.execute_batch("CREATE TABLE cats (name TEXT UNIQUE, color TEXT)")
        .unwrap();
    let seeded = seed_if_empty(&db, "cats", &["name", "color"], &category_rows()).unwrap();
    assert!(seeded);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM cats"), 2);
}

#[test]
fn seed_if_empty_is_a_noop_on_second_call() {
    let db = db();
    db.execute_batch("CREATE TABLE cats (name TEXT UNIQUE, color TEXT)")
        .unwrap();
    seed_if_empty(&db, "cats", &["name", "color"], &category_rows()).unwrap();
    let seeded = seed_if_empty(&db, "cats", &["name", "color"], &category_rows()).unwrap();
    assert!(!seeded);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM cats"), 2);
}

#[test]
fn seed_if_empty_leaves_existing_rows_alone() {
    let db = db();
    db.execute_batch(
        "CREATE TABLE cats (name TEXT UNIQUE, color TEXT);
         INSERT INTO cats (name, color) VALUES ('custom', '#999999');",
    )
    .unwrap();
    let seeded = seed_if_empty(&db, "cats", &["name", "color"], &category_rows()).unwrap();
    assert!(!seeded);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM cats"), 1);
}

#[test]
fn seed_by_key_completes_partial_prior_seeding() {
    let db = db();
    db.execute_batch(
        "CREATE TABLE rewards (level INTEGER PRIMARY KEY, honey INTEGER NOT NULL);
         INSERT INTO rewards (level, honey) VALUES (1, 900), (2, 901), (3, 902);",
    )
    .unwrap();

    let rows: Vec<Vec<Value>> = (1..=5)
        .map(|level| vec![Value::from(level), Value::from(level * 10)])
        .collect();
    let inserted = seed_if_absent_by_key(&db, "rewards", "level", &["level", "honey"], &rows)
        .unwrap();
    assert_eq!(inserted, 2);
    assert_eq!(count(&db, "SELECT COUNT(*) FROM rewards"), 5);

    // Operator-edited values survive untouched, even though they differ
    // from the seed rows.
    assert_eq!(
        count(&db, "SELECT honey FROM rewards WHERE level = 1"),
        900
    );
    assert_eq!(
        count(&db, "SELECT honey FROM rewards WHERE level = 4"),
        40
    );
}

#[test]
fn seed_by_key_is_idempotent() {
    let db = db();
    db.execute_batch("CREATE TABLE rewards (level INTEGER PRIMARY KEY, honey INTEGER NOT NULL)")
        .unwrap();
    let rows: Vec<Vec<Value>> = (1..=3)
        .map(|level| vec![Value::from(level), Value::from(level)])
        .collect();
    assert_eq!(
        seed_if_absent_by_key(&db, "rewards", "level", &["level", "honey"], &rows).unwrap(),
        3
    );
    assert_eq!(
        seed_if_absent_by_key(&db, "rewards", "level", &["level", "honey"], &rows).unwrap(),
        0
    );
}
