//! SQLite access for QueryCraft.
//!
//! Schema introspection, verbatim statement execution, database source
//! selection (configured path or uploaded copy), and result rendering.
//! Every stage opens its own connection and drops it before returning.

pub mod connection;
pub mod executor;
pub mod render;
pub mod schema;
pub mod source;

#[cfg(test)]
mod test_support;

pub use connection::open_existing;
pub use executor::{execute, ExecutionError};
pub use render::{render_json, render_table};
pub use schema::{introspect, ColumnInfo, SchemaDescription, TableSchema};
pub use source::DatabaseSource;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to open {}: {message}", .path.display())]
    Open { path: PathBuf, message: String },

    #[error("failed to read schema: {0}")]
    Schema(#[from] rusqlite::Error),

    #[error("unsupported database file '{0}': expected .db, .sqlite or .sqlite3")]
    UnsupportedExtension(String),

    #[error("'{0}' is not a SQLite database")]
    NotSqlite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
