//! qh-db - Database dialect layer for QuizHive
//!
//! This crate provides the `DatabaseAdapter` trait with SQLite (embedded)
//! and PostgreSQL (server) backends, plus the `Dialect` primitives that
//! confine all DDL syntax differences to one component. Callers compose
//! statements from the primitives; the adapter never rewrites SQL.

pub mod dialect;
pub mod error;
pub mod postgres;
pub mod sqlite;
pub mod traits;
pub mod value;

pub use crate::postgres::PostgresAdapter;
pub use crate::sqlite::SqliteAdapter;
pub use dialect::Dialect;
pub use error::{DbError, DbResult};
pub use traits::DatabaseAdapter;
pub use value::{Row, Value};
