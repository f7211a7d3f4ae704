//! In-memory mirror of the four lookup tables.
//!
//! The store is always the source of truth. The registry keeps each table's
//! names sorted for display and is rebuilt wholesale by
//! [`ReferenceRegistry::load_all`]; the mutating methods below update the
//! store first and touch the mirror only once the store has accepted the
//! change.

use movie_catalog_core::{validate_name, Field, LookupEntry, LookupKind, ValidationError};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{is_foreign_key_violation, is_unique_violation, CatalogError};

/// Sorted names of every lookup table, as last read from the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReferenceRegistry {
    directors: Vec<String>,
    genres: Vec<String>,
    languages: Vec<String>,
    countries: Vec<String>,
}

impl ReferenceRegistry {
    /// Build a registry from the current store contents.
    pub fn load(conn: &Connection) -> Result<Self, CatalogError> {
        let mut registry = Self::default();
        registry.load_all(conn)?;
        Ok(registry)
    }

    /// Replace the whole mirror with the store's current lookup tables.
    pub fn load_all(&mut self, conn: &Connection) -> Result<(), CatalogError> {
        let directors = load_names(conn, LookupKind::Director)?;
        let genres = load_names(conn, LookupKind::Genre)?;
        let languages = load_names(conn, LookupKind::Language)?;
        let countries = load_names(conn, LookupKind::Country)?;
        *self = Self {
            directors,
            genres,
            languages,
            countries,
        };
        Ok(())
    }

    /// Names of one lookup table, sorted ascending.
    pub fn names(&self, kind: LookupKind) -> &[String] {
        match kind {
            LookupKind::Director => &self.directors,
            LookupKind::Genre => &self.genres,
            LookupKind::Language => &self.languages,
            LookupKind::Country => &self.countries,
        }
    }

    pub fn contains(&self, kind: LookupKind, name: &str) -> bool {
        self.names(kind)
            .binary_search_by(|n| n.as_str().cmp(name))
            .is_ok()
    }

    pub fn len(&self, kind: LookupKind) -> usize {
        self.names(kind).len()
    }

    /// Return the id of `name` in `kind`'s table, inserting it first if absent.
    ///
    /// Matching is exact and case-sensitive; `name` is used as given.
    pub fn resolve_or_create(
        &mut self,
        conn: &Connection,
        kind: LookupKind,
        name: &str,
    ) -> Result<i64, CatalogError> {
        if name.trim().is_empty() {
            return Err(ValidationError::Required { field: Field::Name }.into());
        }
        if let Some(id) = find_lookup_id(conn, kind, name)? {
            return Ok(id);
        }

        match insert_entry(conn, kind, name) {
            Ok(id) => {
                log::debug!("Created {} '{}' (id {})", kind, name, id);
                self.insert_sorted(kind, name);
                Ok(id)
            }
            // Someone else inserted it between our lookup and insert.
            Err(e) if is_unique_violation(&e) => find_lookup_id(conn, kind, name)?
                .ok_or_else(|| CatalogError::entry_not_found(kind, name)),
            Err(e) => Err(e.into()),
        }
    }

    /// Explicitly add a new entry, rejecting names that already exist.
    ///
    /// The mirror is checked first to avoid a round trip, but the store's
    /// uniqueness constraint has the final say.
    pub fn add_entry(
        &mut self,
        conn: &Connection,
        kind: LookupKind,
        name: &str,
    ) -> Result<i64, CatalogError> {
        let name = validate_name(name)?;
        if self.contains(kind, name) {
            return Err(duplicate(kind, name));
        }

        let id = insert_entry(conn, kind, name).map_err(|e| {
            if is_unique_violation(&e) {
                duplicate(kind, name)
            } else {
                e.into()
            }
        })?;

        self.insert_sorted(kind, name);
        Ok(id)
    }

    /// Explicitly delete an entry that no movie references.
    ///
    /// On failure neither the store nor the mirror is changed.
    pub fn delete_entry(
        &mut self,
        conn: &Connection,
        kind: LookupKind,
        name: &str,
    ) -> Result<(), CatalogError> {
        let changed = conn
            .execute(
                &format!("DELETE FROM {} WHERE name = ?1", kind.table()),
                params![name],
            )
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    CatalogError::InUse {
                        kind,
                        name: name.to_string(),
                    }
                } else {
                    e.into()
                }
            })?;

        if changed == 0 {
            return Err(CatalogError::entry_not_found(kind, name));
        }

        self.slot_mut(kind).retain(|n| n != name);
        Ok(())
    }

    fn slot_mut(&mut self, kind: LookupKind) -> &mut Vec<String> {
        match kind {
            LookupKind::Director => &mut self.directors,
            LookupKind::Genre => &mut self.genres,
            LookupKind::Language => &mut self.languages,
            LookupKind::Country => &mut self.countries,
        }
    }

    fn insert_sorted(&mut self, kind: LookupKind, name: &str) {
        let names = self.slot_mut(kind);
        if let Err(pos) = names.binary_search_by(|n| n.as_str().cmp(name)) {
            names.insert(pos, name.to_string());
        }
    }
}

/// Find the id of an entry by exact name.
pub fn find_lookup_id(
    conn: &Connection,
    kind: LookupKind,
    name: &str,
) -> Result<Option<i64>, CatalogError> {
    let id = conn
        .query_row(
            &format!("SELECT id FROM {} WHERE name = ?1", kind.table()),
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// List every entry of one lookup table, sorted by name.
pub fn list_lookup_entries(
    conn: &Connection,
    kind: LookupKind,
) -> Result<Vec<LookupEntry>, CatalogError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id, name FROM {} ORDER BY name",
        kind.table()
    ))?;
    let rows = stmt.query_map([], |row| {
        Ok(LookupEntry {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn load_names(conn: &Connection, kind: LookupKind) -> Result<Vec<String>, CatalogError> {
    let mut stmt = conn.prepare(&format!("SELECT name FROM {} ORDER BY name", kind.table()))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn insert_entry(conn: &Connection, kind: LookupKind, name: &str) -> rusqlite::Result<i64> {
    conn.execute(
        &format!("INSERT INTO {} (name) VALUES (?1)", kind.table()),
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

fn duplicate(kind: LookupKind, name: &str) -> CatalogError {
    CatalogError::DuplicateName {
        kind,
        name: name.to_string(),
    }
}
