use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_catalog_core::{MovieForm, MovieRow};

use crate::cli_types::MovieArgs;
use crate::CliError;

use super::{open_catalog, or_dash, truncate_str};

/// List movies as a table or as JSON.
pub(crate) fn run_list(
    db_path: Option<PathBuf>,
    search: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let (catalog, _) = open_catalog(db_path)?;
    let movies = catalog.movies(search.as_deref())?;

    if json {
        let out = serde_json::to_string_pretty(&movies)
            .map_err(|e| CliError::other(format!("Failed to serialize movies: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if movies.is_empty() {
        match search.as_deref() {
            Some(s) if !s.is_empty() => log::info!("No movies match '{}'.", s),
            _ => log::info!("The catalog is empty. Add one with 'movie-catalog add'."),
        }
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "{:>5}  {:<30} {:<22} {:>4}  {:<10} {:>5} {:>6}  {:<10} {:<10}",
            "ID", "Title", "Director", "Year", "Genre", "Min", "Rating", "Language", "Country"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for m in &movies {
        log::info!(
            "{:>5}  {:<30} {:<22} {:>4}  {:<10} {:>5} {:>6}  {:<10} {:<10}",
            m.id,
            truncate_str(&m.title, 30),
            truncate_str(&or_dash(m.director.as_deref()), 22),
            or_dash(m.release_year),
            truncate_str(&or_dash(m.genre.as_deref()), 10),
            or_dash(m.duration),
            or_dash(m.rating),
            truncate_str(&or_dash(m.language.as_deref()), 10),
            truncate_str(&or_dash(m.country.as_deref()), 10),
        );
    }
    crate::log_blank();
    log::info!("{} movie(s)", movies.len());

    Ok(())
}

/// Show every field of one movie.
pub(crate) fn run_show(db_path: Option<PathBuf>, id: i64) -> Result<(), CliError> {
    let (catalog, _) = open_catalog(db_path)?;
    let movie = catalog.movie(id)?;
    print_movie(&movie);
    Ok(())
}

pub(crate) fn run_add(db_path: Option<PathBuf>, movie: MovieArgs) -> Result<(), CliError> {
    let (mut catalog, _) = open_catalog(db_path)?;
    let form = movie.into_form();
    let id = catalog.add_movie(&form)?;

    log::info!(
        "{} Added '{}' (id {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        form.title.trim(),
        id,
    );
    Ok(())
}

/// Edit a movie. The form starts from the stored values and only the given
/// fields are replaced before the full-record update.
pub(crate) fn run_edit(db_path: Option<PathBuf>, id: i64, movie: MovieArgs) -> Result<(), CliError> {
    let (mut catalog, _) = open_catalog(db_path)?;
    let current = catalog.movie(id)?;

    let mut form = MovieForm::from(&current);
    movie.apply_to(&mut form);
    catalog.edit_movie(id, &form)?;

    log::info!(
        "{} Updated movie {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        id,
    );
    print_movie(&catalog.movie(id)?);
    Ok(())
}

pub(crate) fn run_delete(db_path: Option<PathBuf>, id: i64, yes: bool) -> Result<(), CliError> {
    let (mut catalog, _) = open_catalog(db_path)?;
    let movie = catalog.movie(id)?;

    if !yes && !crate::confirm(&format!("Delete '{}' (id {})?", movie.title, id))? {
        log::info!("Nothing deleted.");
        return Ok(());
    }

    catalog.remove_movie(id)?;
    log::info!(
        "{} Deleted '{}'",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        movie.title,
    );
    Ok(())
}

fn print_movie(m: &MovieRow) {
    log::info!(
        "{} {}",
        m.title.if_supports_color(Stdout, |t| t.bold()),
        format!("(id {})", m.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Director:    {}", or_dash(m.director.as_deref()));
    log::info!("  Year:        {}", or_dash(m.release_year));
    log::info!("  Genre:       {}", or_dash(m.genre.as_deref()));
    log::info!(
        "  Duration:    {}",
        m.duration
            .map_or_else(|| "-".to_string(), |d| format!("{} min", d))
    );
    log::info!("  Rating:      {}", or_dash(m.rating));
    log::info!("  Language:    {}", or_dash(m.language.as_deref()));
    log::info!("  Country:     {}", or_dash(m.country.as_deref()));
    if let Some(description) = &m.description {
        crate::log_blank();
        log::info!("  {}", description);
    }
}
