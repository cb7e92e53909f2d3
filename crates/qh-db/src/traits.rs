//! Database adapter trait definition

use crate::dialect::Dialect;
use crate::error::{DbError, DbResult};
use crate::value::{Row, Value};

/// Dialect-aware database abstraction for the migration engine.
///
/// The adapter executes statements verbatim; it is the callers' job to
/// compose dialect-appropriate SQL from [`Dialect`] primitives. Driver
/// faults surface unmodified (classified, never retried) — retry policy
/// belongs to the network layer, not here.
pub trait DatabaseAdapter: Send + Sync {
    /// Execute SQL that modifies schema or data, returns affected rows
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<usize>;

    /// Execute multiple semicolon-separated statements without parameters
    fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and collect all result rows
    fn query(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>>;

    /// The active dialect
    fn dialect(&self) -> Dialect;

    /// First result row, if any
    fn query_one(&self, sql: &str, params: &[Value]) -> DbResult<Option<Row>> {
        Ok(self.query(sql, params)?.into_iter().next())
    }

    /// Single scalar integer result (COUNT queries and friends)
    fn query_i64(&self, sql: &str, params: &[Value]) -> DbResult<i64> {
        let row = self
            .query_one(sql, params)?
            .ok_or_else(|| DbError::Internal(format!("query returned no rows: {sql}")))?;
        row.get(0)
            .and_then(Value::as_i64)
            .ok_or_else(|| DbError::Internal(format!("query did not return an integer: {sql}")))
    }
}
