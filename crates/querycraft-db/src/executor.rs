//! Verbatim statement execution.
//!
//! The statement is run exactly as generated. Nothing is validated first, so
//! mutating statements go through too.

use std::path::Path;
use std::time::Instant;

use querycraft_common::{CellValue, ResultTable};
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection};
use tracing::debug;

use crate::connection::open_existing;

/// A statement the engine rejected, with the statement it rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Execution failed on sql '{sql}': {message}")]
pub struct ExecutionError {
    pub sql: String,
    pub message: String,
}

/// Run `sql` against the database at `path` and collect every row.
///
/// Statements without result columns are still executed and yield an empty
/// table.
pub fn execute(path: &Path, sql: &str) -> Result<ResultTable, ExecutionError> {
    let fail = |message: String| ExecutionError {
        sql: sql.to_string(),
        message,
    };

    let conn = open_existing(path).map_err(|e| fail(e.to_string()))?;
    let started = Instant::now();
    let table = query_all(&conn, sql).map_err(|e| match e {
        rusqlite::Error::MultipleStatement => {
            fail("You can only execute one statement at a time.".to_string())
        }
        e => fail(e.to_string()),
    })?;
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "statement executed"
    );
    Ok(table)
}

/// Execute one statement on an open connection.
///
/// Text holding a second statement is rejected with
/// [`rusqlite::Error::MultipleStatement`] before anything runs.
pub fn query_all(conn: &Connection, sql: &str) -> rusqlite::Result<ResultTable> {
    let mut batch = Batch::new(conn, sql);
    let Some(mut stmt) = batch.next()? else {
        return Ok(ResultTable::new(Vec::new()));
    };
    if batch.next()?.is_some() {
        return Err(rusqlite::Error::MultipleStatement);
    }
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();
    let mut table = ResultTable::new(columns);

    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for i in 0..width {
            cells.push(cell_from(row.get_ref(i)?));
        }
        table.push_row(cells);
    }
    Ok(table)
}

fn cell_from(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(f) => CellValue::Real(f),
        ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => CellValue::Blob(bytes.to_vec()),
    }
}
