//! CRUD operations and queries on the movies table.

use movie_catalog_core::{MovieRecord, MovieRow};
use rusqlite::{params, Connection, OptionalExtension, Statement};

use crate::error::CatalogError;

/// Movies joined with their lookup names, in display column order.
const SELECT_MOVIE_ROWS: &str = "
    SELECT movies.id, movies.title, directors.name, movies.release_year, genres.name,
           movies.duration, movies.rating, languages.name, countries.name, movies.description
    FROM movies
    LEFT JOIN directors ON movies.director_id = directors.id
    LEFT JOIN genres ON movies.genre_id = genres.id
    LEFT JOIN languages ON movies.language_id = languages.id
    LEFT JOIN countries ON movies.country_id = countries.id";

// ── Listing ─────────────────────────────────────────────────────────────────

/// A prepared movie listing, optionally filtered by title substring.
///
/// Rows are produced lazily by [`MovieQuery::rows`]. Each call to `rows`
/// re-runs the query, so the same `MovieQuery` can be iterated again after
/// the store has changed.
pub struct MovieQuery<'conn> {
    stmt: Statement<'conn>,
    pattern: Option<String>,
}

impl<'conn> MovieQuery<'conn> {
    /// Prepare a listing. An empty or absent filter matches every movie.
    ///
    /// The filter is matched with SQL `LIKE`, so it is case-insensitive for
    /// ASCII letters and `%`/`_` act as wildcards.
    pub fn prepare(conn: &'conn Connection, title_filter: Option<&str>) -> Result<Self, CatalogError> {
        let pattern = title_filter
            .filter(|f| !f.is_empty())
            .map(|f| format!("%{}%", f));
        let sql = if pattern.is_some() {
            format!("{SELECT_MOVIE_ROWS} WHERE movies.title LIKE ?1 ORDER BY movies.id")
        } else {
            format!("{SELECT_MOVIE_ROWS} ORDER BY movies.id")
        };
        let stmt = conn.prepare(&sql)?;
        Ok(Self { stmt, pattern })
    }

    /// Run the query and iterate over the matching rows.
    pub fn rows(
        &mut self,
    ) -> Result<impl Iterator<Item = Result<MovieRow, CatalogError>> + '_, CatalogError> {
        let rows = match &self.pattern {
            Some(pattern) => self.stmt.query_map(params![pattern], row_to_movie)?,
            None => self.stmt.query_map([], row_to_movie)?,
        };
        Ok(rows.map(|r| r.map_err(CatalogError::from)))
    }
}

/// List movies, optionally filtered by title substring.
pub fn list_movies(
    conn: &Connection,
    title_filter: Option<&str>,
) -> Result<Vec<MovieRow>, CatalogError> {
    let mut query = MovieQuery::prepare(conn, title_filter)?;
    query.rows()?.collect()
}

/// Fetch one movie for display or edit pre-fill.
pub fn get_movie(conn: &Connection, id: i64) -> Result<Option<MovieRow>, CatalogError> {
    let movie = conn
        .query_row(
            &format!("{SELECT_MOVIE_ROWS} WHERE movies.id = ?1"),
            params![id],
            row_to_movie,
        )
        .optional()?;
    Ok(movie)
}

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieRow> {
    Ok(MovieRow {
        id: row.get(0)?,
        title: row.get(1)?,
        director: row.get(2)?,
        release_year: row.get(3)?,
        genre: row.get(4)?,
        duration: row.get(5)?,
        rating: row.get(6)?,
        language: row.get(7)?,
        country: row.get(8)?,
        description: row.get(9)?,
    })
}

// ── Writes ──────────────────────────────────────────────────────────────────

/// Insert a new movie. Returns the generated ID.
pub fn insert_movie(conn: &Connection, movie: &MovieRecord) -> Result<i64, CatalogError> {
    conn.execute(
        "INSERT INTO movies (title, director_id, release_year, genre_id, duration,
             rating, language_id, country_id, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            movie.title,
            movie.director_id,
            movie.release_year,
            movie.genre_id,
            movie.duration,
            movie.rating,
            movie.language_id,
            movie.country_id,
            movie.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace every data column of an existing movie.
pub fn update_movie(conn: &Connection, id: i64, movie: &MovieRecord) -> Result<(), CatalogError> {
    let changed = conn.execute(
        "UPDATE movies SET title = ?2, director_id = ?3, release_year = ?4, genre_id = ?5,
             duration = ?6, rating = ?7, language_id = ?8, country_id = ?9, description = ?10
         WHERE id = ?1",
        params![
            id,
            movie.title,
            movie.director_id,
            movie.release_year,
            movie.genre_id,
            movie.duration,
            movie.rating,
            movie.language_id,
            movie.country_id,
            movie.description,
        ],
    )?;
    if changed == 0 {
        return Err(CatalogError::movie_not_found(id));
    }
    Ok(())
}

/// Delete a movie by id.
pub fn delete_movie(conn: &Connection, id: i64) -> Result<(), CatalogError> {
    let changed = conn.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(CatalogError::movie_not_found(id));
    }
    Ok(())
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts for the catalog tables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: i64,
    pub directors: i64,
    pub genres: i64,
    pub languages: i64,
    pub countries: i64,
}

/// Get row counts for the catalog.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, CatalogError> {
    let count = |table: &str| -> Result<i64, rusqlite::Error> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
    };

    Ok(CatalogStats {
        movies: count("movies")?,
        directors: count("directors")?,
        genres: count("genres")?,
        languages: count("languages")?,
        countries: count("countries")?,
    })
}
