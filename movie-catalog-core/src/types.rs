//! Data model types for the movie catalog.
//!
//! These types represent the persistent catalog schema: the four lookup
//! tables, movies as written, and movies as displayed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Lookup Tables ───────────────────────────────────────────────────────────

/// One of the four reference tables a movie points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    Director,
    Genre,
    Language,
    Country,
}

impl LookupKind {
    /// All lookup kinds, in display order.
    pub const ALL: [LookupKind; 4] = [
        LookupKind::Director,
        LookupKind::Genre,
        LookupKind::Language,
        LookupKind::Country,
    ];

    /// Name of the backing table.
    pub fn table(self) -> &'static str {
        match self {
            LookupKind::Director => "directors",
            LookupKind::Genre => "genres",
            LookupKind::Language => "languages",
            LookupKind::Country => "countries",
        }
    }

    /// Human-readable singular label.
    pub fn label(self) -> &'static str {
        match self {
            LookupKind::Director => "director",
            LookupKind::Genre => "genre",
            LookupKind::Language => "language",
            LookupKind::Country => "country",
        }
    }

    /// Starter names inserted into an empty table on first run.
    pub fn defaults(self) -> &'static [&'static str] {
        match self {
            LookupKind::Director => &[
                "Francis Ford Coppola",
                "Christopher Nolan",
                "Quentin Tarantino",
            ],
            LookupKind::Genre => &["Drama", "Sci-Fi", "Crime"],
            LookupKind::Language => &["English", "Estonian", "Russian"],
            LookupKind::Country => &["USA", "UK", "Estonia"],
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown lookup table '{0}' (expected director, genre, language or country)")]
pub struct UnknownLookupKind(pub String);

impl FromStr for LookupKind {
    type Err = UnknownLookupKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "director" | "directors" => Ok(LookupKind::Director),
            "genre" | "genres" => Ok(LookupKind::Genre),
            "language" | "languages" => Ok(LookupKind::Language),
            "country" | "countries" => Ok(LookupKind::Country),
            _ => Err(UnknownLookupKind(s.to_string())),
        }
    }
}

/// A row in one of the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: i64,
    pub name: String,
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// Raw movie form input, exactly as typed by the user.
///
/// Nothing here has been trimmed or parsed; see [`crate::validate::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub director: String,
    pub release_year: String,
    pub genre: String,
    pub duration: String,
    pub rating: String,
    pub language: String,
    pub country: String,
    pub description: String,
}

impl MovieForm {
    /// Raw lookup name entered for `kind`.
    pub fn lookup_name(&self, kind: LookupKind) -> &str {
        match kind {
            LookupKind::Director => &self.director,
            LookupKind::Genre => &self.genre,
            LookupKind::Language => &self.language,
            LookupKind::Country => &self.country,
        }
    }
}

impl From<&MovieRow> for MovieForm {
    /// Pre-fill a form from a stored movie, as an edit form would.
    fn from(row: &MovieRow) -> Self {
        fn text(v: &Option<String>) -> String {
            v.clone().unwrap_or_default()
        }
        MovieForm {
            title: row.title.clone(),
            director: text(&row.director),
            release_year: row.release_year.map(|y| y.to_string()).unwrap_or_default(),
            genre: text(&row.genre),
            duration: row.duration.map(|d| d.to_string()).unwrap_or_default(),
            rating: row.rating.map(|r| r.to_string()).unwrap_or_default(),
            language: text(&row.language),
            country: text(&row.country),
            description: text(&row.description),
        }
    }
}

/// A validated movie form with its numeric fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub title: String,
    pub director: Option<String>,
    pub release_year: i64,
    pub genre: Option<String>,
    pub duration: Option<i64>,
    pub rating: Option<f64>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl MovieFields {
    /// Lookup name for `kind`, or `None` if the field was left empty.
    pub fn lookup_name(&self, kind: LookupKind) -> Option<&str> {
        match kind {
            LookupKind::Director => self.director.as_deref(),
            LookupKind::Genre => self.genre.as_deref(),
            LookupKind::Language => self.language.as_deref(),
            LookupKind::Country => self.country.as_deref(),
        }
    }
}

/// The nine data columns of a `movies` row, with lookup references resolved to ids.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub director_id: Option<i64>,
    pub release_year: i64,
    pub genre_id: Option<i64>,
    pub duration: Option<i64>,
    pub rating: Option<f64>,
    pub language_id: Option<i64>,
    pub country_id: Option<i64>,
    pub description: Option<String>,
}

/// A movie as displayed: lookup references joined to their names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub director: Option<String>,
    pub release_year: Option<i64>,
    pub genre: Option<String>,
    /// Minutes.
    pub duration: Option<i64>,
    pub rating: Option<f64>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
}
