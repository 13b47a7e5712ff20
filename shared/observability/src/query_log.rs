//! Timing and outcome logging for database queries.

use std::fmt::Display;
use std::time::Instant;

/// Number of rows a query result carries, for logging
pub trait RowCount {
    fn row_count(&self) -> usize;
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

impl<T> RowCount for Option<T> {
    fn row_count(&self) -> usize {
        usize::from(self.is_some())
    }
}

/// Log the outcome of a finished query and hand the result back.
///
/// Successes go to debug with row count and duration, failures to error.
pub fn record_query<T, E>(backend: &str, operation: &str, started: Instant, result: Result<T, E>) -> Result<T, E>
where
    T: RowCount,
    E: Display,
{
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(rows) => tracing::debug!(
            target: "query",
            backend,
            operation,
            rows = rows.row_count(),
            duration_ms,
            "query completed"
        ),
        Err(e) => tracing::error!(
            target: "query",
            backend,
            operation,
            duration_ms,
            error = %e,
            "query failed"
        ),
    }
    result
}
