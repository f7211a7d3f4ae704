use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_catalog_core::settings::resolve_database_path;

use crate::CliError;

use super::open_catalog;

pub(crate) fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let resolved = resolve_database_path(db_path.clone());
    if !resolved.exists() {
        log::warn!("No catalog database found at {}", resolved.display());
        log::info!("Run 'movie-catalog init' to create one.");
        return Ok(());
    }

    let (catalog, db_path) = open_catalog(db_path)?;
    let stats = catalog.stats()?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Movies:     {:>8}", stats.movies);
    log::info!("  Directors:  {:>8}", stats.directors);
    log::info!("  Genres:     {:>8}", stats.genres);
    log::info!("  Languages:  {:>8}", stats.languages);
    log::info!("  Countries:  {:>8}", stats.countries);

    Ok(())
}
