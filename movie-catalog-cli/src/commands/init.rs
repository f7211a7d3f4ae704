use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_catalog_core::LookupKind;

use crate::CliError;

use super::open_catalog;

/// Create the catalog database (if needed) and seed empty lookup tables.
pub(crate) fn run_init(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let (catalog, db_path) = open_catalog(db_path)?;
    let seeded = catalog.seeded();

    log::info!(
        "{}",
        "Catalog ready.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());

    if seeded.total() == 0 {
        log::info!("  Lookup tables already populated; nothing seeded.");
        return Ok(());
    }

    crate::log_blank();
    for kind in LookupKind::ALL {
        let count = seeded.inserted(kind);
        if count > 0 {
            log::info!("  Seeded {:<10} {:>3} entries", kind.table(), count);
        }
    }
    Ok(())
}
