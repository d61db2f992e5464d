//! Scratch databases for unit tests.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

/// A small Chinook-shaped database: artists, albums, and a table whose name
/// needs quoting.
pub(crate) fn sample_db(dir: &Path) -> PathBuf {
    let path = dir.join("sample.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE artists (
            ArtistId INTEGER PRIMARY KEY AUTOINCREMENT,
            Name NVARCHAR(120)
        );
        CREATE TABLE albums (
            AlbumId INTEGER PRIMARY KEY,
            Title NVARCHAR(160) NOT NULL,
            ArtistId INTEGER NOT NULL REFERENCES artists(ArtistId)
        );
        CREATE TABLE "play list" (
            id INTEGER,
            "it's" TEXT
        );
        INSERT INTO artists (Name) VALUES ('AC/DC'), ('Accept'), ('Aerosmith');
        INSERT INTO albums VALUES (1, 'For Those About To Rock We Salute You', 1);
        INSERT INTO albums VALUES (2, 'Balls to the Wall', 2);
        "#,
    )
    .unwrap();
    path
}
