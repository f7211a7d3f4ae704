//! Movie catalog data model types, form validation, and settings.
//!
//! This crate defines the data model for the movie catalog without any
//! database dependencies. Front ends collect a [`MovieForm`] and hand it to
//! `movie-catalog-db`, which validates it with [`parse`] before persisting.

pub mod settings;
pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{parse, validate, validate_name, Field, ValidationError};
