//! Validation of raw movie form input.
//!
//! Checks run in a fixed order (title, year, duration, rating) and only the
//! first failing field is reported. Year and duration accept plain unsigned
//! digit strings only; rating accepts anything that parses as a float.

use std::fmt;

use thiserror::Error;

use crate::types::{LookupKind, MovieFields, MovieForm};

/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// A user-editable field, named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    ReleaseYear,
    Duration,
    Rating,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::ReleaseYear => "release year",
            Field::Duration => "duration",
            Field::Rating => "rating",
            Field::Name => "name",
        })
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {field} is required")]
    Required { field: Field },
    #[error("The {field} must be a whole number")]
    NotNumeric { field: Field },
    #[error("The rating must be a number between 0 and 10")]
    InvalidRating,
}

/// Check a movie form without converting it.
pub fn validate(form: &MovieForm) -> Result<(), ValidationError> {
    parse(form).map(|_| ())
}

/// Validate a movie form and convert it into typed fields.
pub fn parse(form: &MovieForm) -> Result<MovieFields, ValidationError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Required { field: Field::Title });
    }

    let release_year = parse_digits(form.release_year.trim(), Field::ReleaseYear)?;

    let duration = match form.duration.trim() {
        "" => None,
        d => Some(parse_digits(d, Field::Duration)?),
    };

    let rating = match form.rating.trim() {
        "" => None,
        r => Some(parse_rating(r)?),
    };

    Ok(MovieFields {
        title: title.to_string(),
        director: optional(form.lookup_name(LookupKind::Director)),
        release_year,
        genre: optional(form.lookup_name(LookupKind::Genre)),
        duration,
        rating,
        language: optional(form.lookup_name(LookupKind::Language)),
        country: optional(form.lookup_name(LookupKind::Country)),
        description: optional(&form.description),
    })
}

/// Check a lookup entry name, returning it trimmed.
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required { field: Field::Name });
    }
    Ok(name)
}

fn parse_digits(s: &str, field: Field) -> Result<i64, ValidationError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotNumeric { field });
    }
    // Digit-only strings can still overflow.
    s.parse().map_err(|_| ValidationError::NotNumeric { field })
}

fn parse_rating(s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s.parse().map_err(|_| ValidationError::InvalidRating)?;
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(ValidationError::InvalidRating);
    }
    Ok(value)
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
