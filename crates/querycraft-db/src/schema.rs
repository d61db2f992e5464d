//! Schema introspection.
//!
//! Reads the user tables and their declared column types from the catalog
//! and renders them as the text block embedded in the generation prompt.

use std::fmt;
use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::connection::open_existing;
use crate::DbError;

/// Prefix SQLite reserves for its internal tables.
const INTERNAL_TABLE_PREFIX: &str = "sqlite_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type as written in `CREATE TABLE`; empty when none was given.
    pub decl_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

/// Every user table in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDescription {
    pub tables: Vec<TableSchema>,
}

impl SchemaDescription {
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl fmt::Display for SchemaDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.tables {
            writeln!(f, "Table '{}':", table.name)?;
            for column in &table.columns {
                writeln!(f, "  - {} ({})", column.name, column.decl_type)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Open the database at `path` and describe it. Never cached.
pub fn introspect(path: &Path) -> Result<SchemaDescription, DbError> {
    let conn = open_existing(path)?;
    let schema = describe(&conn)?;
    debug!(tables = schema.tables.len(), "schema read");
    Ok(schema)
}

/// Describe the user tables visible on `conn`.
pub fn describe(conn: &Connection) -> rusqlite::Result<SchemaDescription> {
    let mut tables_stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
    let names = tables_stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut columns_stmt = conn.prepare("SELECT name, type FROM pragma_table_info(?1)")?;
    let mut tables = Vec::new();
    for name in names {
        if name.starts_with(INTERNAL_TABLE_PREFIX) {
            continue;
        }
        let columns = columns_stmt
            .query_map([&name], |row| {
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    decl_type: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tables.push(TableSchema { name, columns });
    }

    Ok(SchemaDescription { tables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_db;

    #[test]
    fn lists_user_tables_and_skips_internal_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample_db(dir.path());
        // AUTOINCREMENT creates sqlite_sequence; ANALYZE creates sqlite_stat1.
        Connection::open(&path)
            .unwrap()
            .execute_batch("ANALYZE;")
            .unwrap();

        let schema = introspect(&path).unwrap();
        let names: Vec<&str> = schema.table_names().collect();
        assert_eq!(names, vec!["artists", "albums", "play list"]);
        assert!(names.iter().all(|n| !n.starts_with("sqlite_")));
    }

    #[test]
    fn columns_carry_declared_types() {
        let dir = tempfile::tempdir().unwrap();
        let schema = introspect(&sample_db(dir.path())).unwrap();
        let albums = &schema.tables[1];
        assert_eq!(albums.name, "albums");
        assert_eq!(
            albums.columns,
            vec![
                ColumnInfo {
                    name: "AlbumId".into(),
                    decl_type: "INTEGER".into()
                },
                ColumnInfo {
                    name: "Title".into(),
                    decl_type: "NVARCHAR(160)".into()
                },
                ColumnInfo {
                    name: "ArtistId".into(),
                    decl_type: "INTEGER".into()
                },
            ]
        );
    }

    #[test]
    fn quoted_table_names_are_described() {
        let dir = tempfile::tempdir().unwrap();
        let schema = introspect(&sample_db(dir.path())).unwrap();
        let playlist = schema.tables.iter().find(|t| t.name == "play list").unwrap();
        let columns: Vec<&str> = playlist.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(columns, vec!["id", "it's"]);
    }

    #[test]
    fn renders_prompt_text() {
        let schema = SchemaDescription {
            tables: vec![TableSchema {
                name: "genres".into(),
                columns: vec![
                    ColumnInfo {
                        name: "GenreId".into(),
                        decl_type: "INTEGER".into(),
                    },
                    ColumnInfo {
                        name: "Name".into(),
                        decl_type: "NVARCHAR(120)".into(),
                    },
                ],
            }],
        };
        assert_eq!(
            schema.to_string(),
            "Table 'genres':\n  - GenreId (INTEGER)\n  - Name (NVARCHAR(120))\n\n"
        );
    }

    #[test]
    fn missing_database_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = introspect(&dir.path().join("nope.db")).unwrap_err();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn non_database_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");
        std::fs::write(&path, "this is plain text, not a database file at all").unwrap();
        assert!(introspect(&path).is_err());
    }

    #[test]
    fn database_without_tables_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("PRAGMA user_version = 1;")
            .unwrap();
        let schema = introspect(&path).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.to_string(), "");
    }
}
