//! A catalog session: one open store plus its lookup-table mirror.
//!
//! Front ends drive everything through [`Catalog`]. Each mutating method
//! validates its input before touching the store, resolves lookup names to
//! ids, writes, and then reloads the registry so [`Catalog::registry`]
//! always reflects the store.

use std::path::Path;

use movie_catalog_core::{parse, LookupKind, MovieFields, MovieForm, MovieRecord, MovieRow};
use rusqlite::Connection;

use crate::error::CatalogError;
use crate::movies::{self, CatalogStats, MovieQuery};
use crate::registry::ReferenceRegistry;
use crate::schema::{self, SeedStats};

pub struct Catalog {
    conn: Connection,
    registry: ReferenceRegistry,
    seeded: SeedStats,
}

impl Catalog {
    /// Open (or create) the catalog store at `path`, seeding empty lookup tables.
    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let conn = schema::open_database(path)?;
        log::debug!("Opened catalog store at {}", path.display());
        Self::from_connection(conn)
    }

    /// A fresh in-memory catalog with the default lookup entries.
    pub fn open_memory() -> Result<Self, CatalogError> {
        Self::from_connection(schema::open_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, CatalogError> {
        let seeded = schema::seed_defaults(&conn)?;
        let registry = ReferenceRegistry::load(&conn)?;
        Ok(Self {
            conn,
            registry,
            seeded,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn registry(&self) -> &ReferenceRegistry {
        &self.registry
    }

    /// Lookup entries inserted by seeding when this session was opened.
    pub fn seeded(&self) -> &SeedStats {
        &self.seeded
    }

    /// Re-read the lookup tables from the store.
    pub fn refresh(&mut self) -> Result<(), CatalogError> {
        self.registry.load_all(&self.conn)
    }

    // ── Movies ──────────────────────────────────────────────────────────────

    pub fn movies(&self, title_filter: Option<&str>) -> Result<Vec<MovieRow>, CatalogError> {
        movies::list_movies(&self.conn, title_filter)
    }

    /// Prepare a lazily iterated listing.
    pub fn query(&self, title_filter: Option<&str>) -> Result<MovieQuery<'_>, CatalogError> {
        MovieQuery::prepare(&self.conn, title_filter)
    }

    pub fn movie(&self, id: i64) -> Result<MovieRow, CatalogError> {
        movies::get_movie(&self.conn, id)?.ok_or_else(|| CatalogError::movie_not_found(id))
    }

    /// Validate and store a new movie, creating any lookup entries it names.
    pub fn add_movie(&mut self, form: &MovieForm) -> Result<i64, CatalogError> {
        let fields = parse(form)?;
        let record = self.resolve(fields)?;
        let id = movies::insert_movie(&self.conn, &record)?;
        log::debug!("Inserted movie {} '{}'", id, record.title);
        self.refresh()?;
        Ok(id)
    }

    /// Validate and replace every field of an existing movie.
    pub fn edit_movie(&mut self, id: i64, form: &MovieForm) -> Result<(), CatalogError> {
        let fields = parse(form)?;
        // Nothing may be created for a movie that does not exist.
        if movies::get_movie(&self.conn, id)?.is_none() {
            return Err(CatalogError::movie_not_found(id));
        }
        let record = self.resolve(fields)?;
        movies::update_movie(&self.conn, id, &record)?;
        self.refresh()
    }

    pub fn remove_movie(&mut self, id: i64) -> Result<(), CatalogError> {
        movies::delete_movie(&self.conn, id)?;
        self.refresh()
    }

    fn resolve(&mut self, fields: MovieFields) -> Result<MovieRecord, CatalogError> {
        let mut ids = [None; 4];
        for (slot, kind) in ids.iter_mut().zip(LookupKind::ALL) {
            if let Some(name) = fields.lookup_name(kind) {
                *slot = Some(self.registry.resolve_or_create(&self.conn, kind, name)?);
            }
        }
        let [director_id, genre_id, language_id, country_id] = ids;

        Ok(MovieRecord {
            title: fields.title,
            director_id,
            release_year: fields.release_year,
            genre_id,
            duration: fields.duration,
            rating: fields.rating,
            language_id,
            country_id,
            description: fields.description,
        })
    }

    // ── Lookup tables ───────────────────────────────────────────────────────

    pub fn add_entry(&mut self, kind: LookupKind, name: &str) -> Result<i64, CatalogError> {
        let id = self.registry.add_entry(&self.conn, kind, name)?;
        self.refresh()?;
        Ok(id)
    }

    pub fn delete_entry(&mut self, kind: LookupKind, name: &str) -> Result<(), CatalogError> {
        self.registry.delete_entry(&self.conn, kind, name)?;
        self.refresh()
    }

    pub fn stats(&self) -> Result<CatalogStats, CatalogError> {
        movies::catalog_stats(&self.conn)
    }
}
