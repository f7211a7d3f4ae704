use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_catalog_core::LookupKind;
use movie_catalog_db::{CatalogError, ErrorKind};

use crate::CliError;

use super::open_catalog;

/// List lookup entries, one table or all four.
pub(crate) fn run_refs_list(db_path: Option<PathBuf>, kind: Option<LookupKind>) -> Result<(), CliError> {
    let (catalog, _) = open_catalog(db_path)?;
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => LookupKind::ALL.to_vec(),
    };

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        let names = catalog.registry().names(kind);
        log::info!(
            "{} {}",
            kind.table().if_supports_color(Stdout, |t| t.bold()),
            format!("({})", names.len()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        for name in names {
            log::info!("  {}", name);
        }
    }
    Ok(())
}

pub(crate) fn run_refs_add(db_path: Option<PathBuf>, kind: LookupKind, name: &str) -> Result<(), CliError> {
    let (mut catalog, _) = open_catalog(db_path)?;
    catalog.add_entry(kind, name)?;

    log::info!(
        "{} Added {} '{}'",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        kind,
        name.trim(),
    );
    Ok(())
}

pub(crate) fn run_refs_delete(
    db_path: Option<PathBuf>,
    kind: LookupKind,
    name: &str,
    yes: bool,
) -> Result<(), CliError> {
    let (mut catalog, _) = open_catalog(db_path)?;

    if !catalog.registry().contains(kind, name) {
        return Err(CatalogError::NotFound {
            entity: kind.label(),
            key: name.to_string(),
        }
        .into());
    }

    if !yes && !crate::confirm(&format!("Delete {} '{}'?", kind, name))? {
        log::info!("Nothing deleted.");
        return Ok(());
    }

    match catalog.delete_entry(kind, name) {
        Ok(()) => {
            log::info!(
                "{} Deleted {} '{}'",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                kind,
                name,
            );
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::InUse => {
            log::info!("Remove or edit the movies that use it first.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
