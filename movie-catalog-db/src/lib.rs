//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation and seeding, the lookup-table registry, movie
//! CRUD and queries, and the [`Catalog`] session that ties them together,
//! backed by SQLite (via rusqlite with bundled feature).

pub mod error;
pub mod movies;
pub mod registry;
pub mod schema;
pub mod session;

pub use error::{CatalogError, ErrorKind};
pub use movies::{
    catalog_stats, delete_movie, get_movie, insert_movie, list_movies, update_movie,
    CatalogStats, MovieQuery,
};
pub use registry::{find_lookup_id, list_lookup_entries, ReferenceRegistry};
pub use schema::{ensure_schema, open_database, open_memory, seed_defaults, SchemaError, SeedStats};
pub use session::Catalog;
