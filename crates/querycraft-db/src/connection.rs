//! Connection opening.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::DbError;

/// Open an existing database file for reading and writing.
///
/// Unlike `Connection::open`, a missing file is an error rather than a new
/// empty database.
pub fn open_existing(path: &Path) -> Result<Connection, DbError> {
    if !path.is_file() {
        return Err(DbError::NotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "opening database");
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| DbError::Open {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
