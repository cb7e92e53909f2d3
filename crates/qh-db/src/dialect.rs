//! SQL dialect primitives.
//!
//! All syntax that differs between the embedded and server stores is
//! expressed here as semantic primitives. Migration code composes its DDL
//! from these and never branches on the dialect itself.

use std::fmt;

/// The two supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Embedded, row-oriented file store (SQLite).
    Sqlite,
    /// Server-based relational store (PostgreSQL).
    Postgres,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Sqlite => write!(f, "sqlite"),
            Dialect::Postgres => write!(f, "postgres"),
        }
    }
}

impl Dialect {
    /// Column definition for an auto-incrementing integer primary key.
    pub fn auto_increment_primary_key(self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
            Dialect::Postgres => "BIGSERIAL PRIMARY KEY",
        }
    }

    /// Column type used to reference an auto-increment id from another table.
    pub fn id_type(self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER",
            Dialect::Postgres => "BIGINT",
        }
    }

    /// Column type for boolean flags.
    pub fn boolean_type(self) -> &'static str {
        match self {
            Dialect::Sqlite => "INTEGER",
            Dialect::Postgres => "BOOLEAN",
        }
    }

    /// Literal spelling of a boolean value.
    pub fn boolean_literal(self, value: bool) -> &'static str {
        match (self, value) {
            (Dialect::Sqlite, true) => "1",
            (Dialect::Sqlite, false) => "0",
            (Dialect::Postgres, true) => "TRUE",
            (Dialect::Postgres, false) => "FALSE",
        }
    }

    /// Column type for timestamps.
    pub fn timestamp_type(self) -> &'static str {
        match self {
            Dialect::Sqlite => "DATETIME",
            Dialect::Postgres => "TIMESTAMPTZ",
        }
    }

    /// Expression for the current time, used both as a column DEFAULT and
    /// as an INSERT value.
    pub fn timestamp_default(self) -> &'static str {
        match self {
            Dialect::Sqlite => "CURRENT_TIMESTAMP",
            Dialect::Postgres => "now()",
        }
    }

    /// Column type able to hold a JSON document (question options).
    pub fn json_column_type(self) -> &'static str {
        match self {
            Dialect::Sqlite => "TEXT",
            Dialect::Postgres => "JSONB",
        }
    }

    /// Parameter placeholder for the 1-based position `n`.
    pub fn placeholder(self, n: usize) -> String {
        match self {
            Dialect::Sqlite => format!("?{n}"),
            Dialect::Postgres => format!("${n}"),
        }
    }

    /// Comma-separated placeholder list for positions `1..=count`.
    pub fn placeholders(self, count: usize) -> String {
        (1..=count)
            .map(|n| self.placeholder(n))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the dialect enforces named foreign-key constraints.
    ///
    /// The embedded dialect accepts inline REFERENCES clauses but does not
    /// support adding or dropping named constraints after table creation.
    pub fn supports_named_constraints(self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    /// Insert-if-absent statement keyed on `conflict_key`, with positional
    /// placeholders for every column.
    pub fn insert_ignore(self, table: &str, columns: &[&str], conflict_key: &str) -> String {
        let cols = columns.join(", ");
        let params = self.placeholders(columns.len());
        match self {
            Dialect::Sqlite => {
                format!("INSERT OR IGNORE INTO {table} ({cols}) VALUES ({params})")
            }
            Dialect::Postgres => {
                format!(
                    "INSERT INTO {table} ({cols}) VALUES ({params}) ON CONFLICT ({conflict_key}) DO NOTHING"
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
