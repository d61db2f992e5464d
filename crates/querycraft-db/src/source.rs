//! Which database file a session queries.
//!
//! Either a configured path used in place, or an uploaded copy held in a
//! temporary file that is deleted when the source is dropped.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::DbError;

/// Extensions accepted for uploaded databases.
pub const UPLOAD_EXTENSIONS: [&str; 3] = ["db", "sqlite", "sqlite3"];

const SQLITE_MAGIC: &[u8] = b"SQLite format 3\0";

#[derive(Debug)]
pub enum DatabaseSource {
    /// A file queried where it lives.
    Path(PathBuf),
    /// A private copy of an uploaded file.
    Uploaded { name: String, file: NamedTempFile },
}

impl DatabaseSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        DatabaseSource::Path(path.into())
    }

    /// Copy the database at `path` into a temporary file and use the copy.
    pub fn upload(path: &Path) -> Result<Self, DbError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        check_extension(&name)?;
        if !path.is_file() {
            return Err(DbError::NotFound(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        Self::from_bytes(name, &bytes)
    }

    /// Store uploaded bytes in a temporary file for the session's lifetime.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, DbError> {
        let name = name.into();
        if !bytes.is_empty() && !bytes.starts_with(SQLITE_MAGIC) {
            return Err(DbError::NotSqlite(name));
        }

        let mut file = tempfile::Builder::new()
            .prefix("querycraft-")
            .suffix(".db")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        info!(name = %name, temp = %file.path().display(), "database uploaded");
        Ok(DatabaseSource::Uploaded { name, file })
    }

    /// Filesystem path to open.
    pub fn path(&self) -> &Path {
        match self {
            DatabaseSource::Path(path) => path,
            DatabaseSource::Uploaded { file, .. } => file.path(),
        }
    }

    /// Human-readable name for prompts and banners.
    pub fn label(&self) -> String {
        match self {
            DatabaseSource::Path(path) => path.display().to_string(),
            DatabaseSource::Uploaded { name, .. } => format!("{name} (uploaded)"),
        }
    }
}

fn check_extension(name: &str) -> Result<(), DbError> {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if UPLOAD_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(DbError::UnsupportedExtension(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::introspect;
    use crate::test_support::sample_db;

    #[test]
    fn path_source_uses_path_in_place() {
        let source = DatabaseSource::from_path("chinook.db");
        assert_eq!(source.path(), Path::new("chinook.db"));
        assert_eq!(source.label(), "chinook.db");
    }

    #[test]
    fn upload_copies_into_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let original = sample_db(dir.path());
        let source = DatabaseSource::upload(&original).unwrap();

        assert!(matches!(source, DatabaseSource::Uploaded { .. }));
        assert_ne!(source.path(), original.as_path());
        assert_eq!(source.label(), "sample.db (uploaded)");

        let schema = introspect(source.path()).unwrap();
        assert!(schema.table_names().any(|n| n == "artists"));
    }

    #[test]
    fn upload_is_isolated_from_original() {
        let dir = tempfile::tempdir().unwrap();
        let original = sample_db(dir.path());
        let source = DatabaseSource::upload(&original).unwrap();
        crate::execute(source.path(), "DROP TABLE albums").unwrap();

        let schema = introspect(&original).unwrap();
        assert!(schema.table_names().any(|n| n == "albums"));
    }

    #[test]
    fn temp_file_is_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatabaseSource::upload(&sample_db(dir.path())).unwrap();
        let temp = source.path().to_path_buf();
        assert!(temp.exists());
        drop(source);
        assert!(!temp.exists());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        assert!(matches!(
            DatabaseSource::upload(&path),
            Err(DbError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn accepts_uppercase_extension() {
        assert!(check_extension("Chinook.SQLITE3").is_ok());
        assert!(check_extension("music.db").is_ok());
        assert!(check_extension("noext").is_err());
    }

    #[test]
    fn rejects_non_sqlite_bytes() {
        assert!(matches!(
            DatabaseSource::from_bytes("fake.db", b"PK\x03\x04 zip archive"),
            Err(DbError::NotSqlite(_))
        ));
    }

    #[test]
    fn missing_upload_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DatabaseSource::upload(&dir.path().join("absent.db")),
            Err(DbError::NotFound(_))
        ));
    }
}
