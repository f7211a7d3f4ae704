//! Application settings (catalog database location).
//!
//! The settings file is `~/.config/movie-catalog/settings.toml`. Only the
//! `[catalog]` table is read or written here; other tables are preserved.

use std::io;
use std::path::{Path, PathBuf};

/// File name of the catalog store when nothing else is configured.
pub const DEFAULT_DATABASE_FILE: &str = "movies.db";

/// Canonical path to the settings file: `~/.config/movie-catalog/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("movie-catalog").join("settings.toml")
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.database` in `settings.toml`
/// 3. `movies.db` in the current working directory
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_database_path_with(cli_override, &settings_path())
}

/// Same as [`resolve_database_path`], reading an explicit settings file.
pub fn resolve_database_path_with(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path(settings) {
        return p;
    }
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

/// Read `catalog.database` from a settings file, if set.
pub fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let db = doc.get("catalog")?.get("database")?.as_str()?;
    if db.is_empty() {
        None
    } else {
        Some(PathBuf::from(db))
    }
}

/// Save (or clear) the database path in the default settings file.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    save_database_path_to(&settings_path(), path)
}

/// Save (or clear) `catalog.database` in an explicit settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated tables survive.
pub fn save_database_path_to(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "database".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("database");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
