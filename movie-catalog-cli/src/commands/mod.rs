pub(crate) mod config;
pub(crate) mod init;
pub(crate) mod movies;
pub(crate) mod refs;
pub(crate) mod stats;

use std::path::PathBuf;

use movie_catalog_core::settings::resolve_database_path;
use movie_catalog_db::Catalog;

use crate::CliError;

/// Open the catalog at the resolved database path, creating it if needed.
pub(crate) fn open_catalog(db_path: Option<PathBuf>) -> Result<(Catalog, PathBuf), CliError> {
    let db_path = resolve_database_path(db_path);
    log::debug!("Using catalog database {}", db_path.display());
    let catalog = Catalog::open(&db_path)?;
    Ok((catalog, db_path))
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// Display text for an optional value, "-" when absent.
pub(crate) fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
