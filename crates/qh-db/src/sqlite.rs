//! SQLite database backend implementation (embedded dialect)

use crate::dialect::Dialect;
use crate::error::{DbError, DbResult};
use crate::traits::DatabaseAdapter;
use crate::value::{Row, Value};
use rusqlite::types::{ToSqlOutput, Value as SqlValue, ValueRef};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// SQLite database backend
pub struct SqliteAdapter {
    conn: Mutex<Connection>,
}

impl SqliteAdapter {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new SQLite connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| DbError::MutexPoisoned(e.to_string()))
    }
}

impl DatabaseAdapter for SqliteAdapter {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize> {
        let conn = self.lock()?;
        conn.execute(sql, rusqlite::params_from_iter(params.iter()))
            .map_err(|e| classify(&e, sql))
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(sql).map_err(|e| classify(&e, sql))
    }

    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(|e| classify(&e, sql))?;
        let columns: Vec<String> = stmt
            .column_names()
            .iter()
            .map(|name| (*name).to_string())
            .collect();

        let mut raw = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| classify(&e, sql))?;

        let mut rows = Vec::new();
        while let Some(row) = raw.next().map_err(|e| classify(&e, sql))? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                let value = row.get_ref(idx).map_err(|e| classify(&e, sql))?;
                values.push(column_value(value));
            }
            rows.push(Row::new(columns.clone(), values));
        }
        Ok(rows)
    }

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }
}

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(SqlValue::Null),
            Value::Int(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Value::Real(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Bool(v) => ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v))),
        })
    }
}

fn column_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Int(v),
        ValueRef::Real(v) => Value::Real(v),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        // Blobs never appear in the schema the engine manages.
        ValueRef::Blob(_) => Value::Null,
    }
}

/// Classify SQLite errors by inspecting the error message.
///
/// rusqlite does not expose structured variants for DDL faults, so string
/// matching is the only reliable approach. We use narrow patterns to avoid
/// misclassifying unrelated errors.
fn classify(err: &rusqlite::Error, sql: &str) -> DbError {
    let message = err.to_string();
    let already_exists = message.contains("already exists")
        && (message.contains("table")
            || message.contains("index")
            || message.contains("view")
            || message.contains("column"));
    if message.contains("duplicate column name") || already_exists {
        DbError::DuplicateArtifact {
            dialect: Dialect::Sqlite,
            message,
        }
    } else if message.contains("UNIQUE constraint failed") {
        DbError::UniqueViolation { message }
    } else {
        DbError::Statement {
            dialect: Dialect::Sqlite,
            sql: sql.to_string(),
            message,
        }
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
