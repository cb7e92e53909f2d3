//! Tests for the SQLite backend and fault classification.

use crate::sqlite::SqliteAdapter;
use crate::traits::DatabaseAdapter;
use crate::value::Value;
use crate::Dialect;

fn adapter() -> SqliteAdapter {
    SqliteAdapter::in_memory().unwrap()
}

#[test]
fn reports_embedded_dialect() {
    assert_eq!(adapter().dialect(), Dialect::Sqlite);
}

#[test]
fn execute_and_query_round_trip() {
    let db = adapter();
    db.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT, done INTEGER)")
        .unwrap();
    let affected = db
        .execute(
            "INSERT INTO notes (body, done) VALUES (?1, ?2)",
            &[Value::from("hello"), Value::from(true)],
        )
        .unwrap();
    assert_eq!(affected, 1);

    let rows = db.query("SELECT id, body, done FROM notes", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_named("body").unwrap().as_str(), Some("hello"));
    assert_eq!(rows[0].get_named("done").unwrap().as_bool(), Some(true));
}

#[test]
fn query_i64_returns_counts() {
    let db = adapter();
    db.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
    db.execute("INSERT INTO t (x) VALUES (?1)", &[Value::from(7)])
        .unwrap();
    assert_eq!(db.query_i64("SELECT COUNT(*) FROM t", &[]).unwrap(), 1);
}

#[test]
fn null_parameters_bind_as_null() {
    let db = adapter();
    db.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
    db.execute("INSERT INTO t (x) VALUES (?1)", &[Value::Null])
        .unwrap();
    let rows = db.query("SELECT x FROM t", &[]).unwrap();
    assert!(rows[0].get(0).unwrap().is_null());
}

#[test]
fn duplicate_table_classified_as_duplicate_artifact() {
    let db = adapter();
    db.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
    let err = db.execute("CREATE TABLE t (x INTEGER)", &[]).unwrap_err();
    assert!(err.is_duplicate_artifact(), "got: {err}");
}

#[test]
fn duplicate_column_classified_as_duplicate_artifact() {
    let db = adapter();
    db.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
    let err = db
        .execute("ALTER TABLE t ADD COLUMN x INTEGER", &[])
        .unwrap_err();
    assert!(err.is_duplicate_artifact(), "got: {err}");
}

#[test]
fn unique_violation_classified() {
    let db = adapter();
    db.execute_batch("CREATE TABLE t (x INTEGER UNIQUE)").unwrap();
    db.execute("INSERT INTO t (x) VALUES (?1)", &[Value::from(1)])
        .unwrap();
    let err = db
        .execute("INSERT INTO t (x) VALUES (?1)", &[Value::from(1)])
        .unwrap_err();
    assert!(err.is_unique_violation(), "got: {err}");
}

#[test]
fn syntax_error_carries_statement() {
    let db = adapter();
    let err = db.execute("CREATE BOGUS", &[]).unwrap_err();
    assert!(err.to_string().contains("CREATE BOGUS"), "got: {err}");
}

#[test]
fn file_backed_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz.db");
    {
        let db = SqliteAdapter::from_path(&path).unwrap();
        db.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
    }
    let db = SqliteAdapter::from_path(&path).unwrap();
    assert_eq!(
        db.query_i64(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 't'",
            &[]
        )
        .unwrap(),
        1
    );
}
