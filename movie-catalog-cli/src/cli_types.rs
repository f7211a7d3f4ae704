//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use movie_catalog_core::{LookupKind, MovieForm};

#[derive(Parser)]
#[command(name = "movie-catalog")]
#[command(about = "Catalogue movies with their directors, genres, languages and countries", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the saved setting, then ./movies.db)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Movie form fields. Every value is passed through unparsed; validation
/// happens in the catalog.
#[derive(Args, Clone)]
pub(crate) struct MovieArgs {
    /// Movie title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Director name (created if new)
    #[arg(long)]
    pub director: Option<String>,

    /// Release year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Genre name (created if new)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<String>,

    /// Rating from 0 to 10
    #[arg(short, long)]
    pub rating: Option<String>,

    /// Language name (created if new)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Country name (created if new)
    #[arg(short, long)]
    pub country: Option<String>,

    /// Free-text description
    #[arg(long)]
    pub description: Option<String>,
}

impl MovieArgs {
    /// Overlay the given fields onto `form`, leaving the rest untouched.
    pub fn apply_to(self, form: &mut MovieForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.director, &mut form.director),
            (self.year, &mut form.release_year),
            (self.genre, &mut form.genre),
            (self.duration, &mut form.duration),
            (self.rating, &mut form.rating),
            (self.language, &mut form.language),
            (self.country, &mut form.country),
            (self.description, &mut form.description),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    pub fn into_form(self) -> MovieForm {
        let mut form = MovieForm::default();
        self.apply_to(&mut form);
        form
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the catalog database and seed default lookup entries
    Init,

    /// List movies, optionally filtered by title
    List {
        /// Only show movies whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie in full
    Show {
        /// Movie id
        id: i64,
    },

    /// Add a movie
    Add {
        #[command(flatten)]
        movie: MovieArgs,
    },

    /// Edit a movie (fields not given keep their current values)
    Edit {
        /// Movie id
        id: i64,

        #[command(flatten)]
        movie: MovieArgs,
    },

    /// Delete a movie
    Delete {
        /// Movie id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Manage the director, genre, language and country tables
    Refs {
        #[command(subcommand)]
        action: RefsAction,
    },

    /// Show row counts for the catalog
    Stats,

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum RefsAction {
    /// List entries (all tables if none given)
    List {
        /// director, genre, language or country
        kind: Option<LookupKind>,
    },

    /// Add an entry
    Add {
        /// director, genre, language or country
        kind: LookupKind,

        /// Entry name
        name: String,
    },

    /// Delete an entry that no movie uses
    Delete {
        /// director, genre, language or country
        kind: LookupKind,

        /// Entry name
        name: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Print the settings file path
    Path,

    /// Remember a database path
    SetDatabase {
        /// Path to the catalog database file
        path: PathBuf,
    },

    /// Forget the saved database path
    ClearDatabase,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn edit_overlays_only_given_fields() {
        let cli = Cli::parse_from(["movie-catalog", "edit", "3", "--year", "1999", "-r", "7.5"]);
        let Commands::Edit { id, movie } = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, 3);

        let mut form = MovieForm {
            title: "Fight Club".to_string(),
            release_year: "1998".to_string(),
            genre: "Drama".to_string(),
            ..Default::default()
        };
        movie.apply_to(&mut form);
        assert_eq!(form.title, "Fight Club");
        assert_eq!(form.release_year, "1999");
        assert_eq!(form.rating, "7.5");
        assert_eq!(form.genre, "Drama");
    }

    #[test]
    fn refs_kind_accepts_plural() {
        let cli = Cli::parse_from(["movie-catalog", "refs", "add", "genres", "Western"]);
        let Commands::Refs {
            action: RefsAction::Add { kind, name },
        } = cli.command
        else {
            panic!("expected refs add");
        };
        assert_eq!(kind, LookupKind::Genre);
        assert_eq!(name, "Western");
    }

    #[test]
    fn unknown_refs_kind_is_rejected() {
        let result = Cli::try_parse_from(["movie-catalog", "refs", "list", "actors"]);
        assert!(result.is_err());
    }
}
