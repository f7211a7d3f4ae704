//! Error type shared by all catalog operations.

use movie_catalog_core::{LookupKind, ValidationError};
use rusqlite::ffi;
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("A {kind} named '{name}' already exists")]
    DuplicateName { kind: LookupKind, name: String },
    #[error("Cannot delete {kind} '{name}': it is used by at least one movie")]
    InUse { kind: LookupKind, name: String },
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(#[from] rusqlite::Error),
    #[error("Catalog store unavailable: {0}")]
    Schema(#[from] SchemaError),
}

/// Flat classification of [`CatalogError`], for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    NotNumeric,
    InvalidRating,
    DuplicateName,
    InUse,
    NotFound,
    StoreUnavailable,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(ValidationError::Required { .. }) => ErrorKind::Required,
            CatalogError::Validation(ValidationError::NotNumeric { .. }) => ErrorKind::NotNumeric,
            CatalogError::Validation(ValidationError::InvalidRating) => ErrorKind::InvalidRating,
            CatalogError::DuplicateName { .. } => ErrorKind::DuplicateName,
            CatalogError::InUse { .. } => ErrorKind::InUse,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::StoreUnavailable(_) | CatalogError::Schema(_) => {
                ErrorKind::StoreUnavailable
            }
        }
    }

    pub(crate) fn movie_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "movie",
            key: id.to_string(),
        }
    }

    pub(crate) fn entry_not_found(kind: LookupKind, name: &str) -> Self {
        Self::NotFound {
            entity: kind.label(),
            key: name.to_string(),
        }
    }
}

/// Extended result code of a constraint violation, if `err` is one.
fn constraint_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            Some(e.extended_code)
        }
        _ => None,
    }
}

pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    constraint_code(err) == Some(ffi::SQLITE_CONSTRAINT_UNIQUE)
}

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    constraint_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
