//! SQLite schema creation and default seeding.

use movie_catalog_core::LookupKind;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Unsupported schema: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn ensure_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;

    let version = get_schema_version(conn)?;
    if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    if version < CURRENT_VERSION {
        set_schema_version(conn, CURRENT_VERSION)?;
        log::debug!("Catalog schema created (version {})", CURRENT_VERSION);
    }
    Ok(())
}

/// Open or create a catalog database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Number of starter rows inserted per lookup table by [`seed_defaults`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedStats {
    pub directors: usize,
    pub genres: usize,
    pub languages: usize,
    pub countries: usize,
}

impl SeedStats {
    pub fn inserted(&self, kind: LookupKind) -> usize {
        match kind {
            LookupKind::Director => self.directors,
            LookupKind::Genre => self.genres,
            LookupKind::Language => self.languages,
            LookupKind::Country => self.countries,
        }
    }

    pub fn total(&self) -> usize {
        self.directors + self.genres + self.languages + self.countries
    }

    fn slot_mut(&mut self, kind: LookupKind) -> &mut usize {
        match kind {
            LookupKind::Director => &mut self.directors,
            LookupKind::Genre => &mut self.genres,
            LookupKind::Language => &mut self.languages,
            LookupKind::Country => &mut self.countries,
        }
    }
}

/// Insert the starter names into every lookup table that is currently empty.
///
/// Tables that already hold any row are left alone, so running this twice
/// never duplicates entries.
pub fn seed_defaults(conn: &Connection) -> Result<SeedStats, SchemaError> {
    let mut stats = SeedStats::default();

    for kind in LookupKind::ALL {
        let table = kind.table();
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        if count > 0 {
            continue;
        }

        let mut stmt = conn.prepare(&format!("INSERT INTO {table} (name) VALUES (?1)"))?;
        for name in kind.defaults() {
            stmt.execute(params![name])?;
        }
        *stats.slot_mut(kind) = kind.defaults().len();
        log::debug!("Seeded {} default {} entries", kind.defaults().len(), kind);
    }

    Ok(stats)
}

/// Get the current schema version, or 0 if none has been recorded.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Lookup tables
CREATE TABLE IF NOT EXISTS languages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS countries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS genres (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

CREATE TABLE IF NOT EXISTS directors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

-- Movies
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    director_id INTEGER REFERENCES directors(id),
    release_year INTEGER,
    genre_id INTEGER REFERENCES genres(id),
    duration INTEGER,
    rating REAL,
    language_id INTEGER REFERENCES languages(id),
    country_id INTEGER REFERENCES countries(id),
    description TEXT
);
"#;
