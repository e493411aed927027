//! Domain records and configuration.
//!
//! Each record kind knows how many delimited fields it occupies, how to build
//! itself from those fields, and which records a user's filter selects.

use std::num::ParseIntError;

/// Collection points for recyclable material.
pub mod collection_point;
pub use collection_point::CollectionPoint;

/// Public transport routes.
pub mod route;
pub use route::Route;

/// Vehicle rotation schedule entries.
pub mod rotation;
pub use rotation::Rotation;

/// Program configuration.
pub mod config;
pub use config::{Config, ProgramConfig};

/// A record parsed from one delimited line.
pub trait Record: Sized {
    /// Number of fields the record occupies.
    ///
    /// Lines are split into at most this many fields, so any extra
    /// delimiters end up in the last field.
    const FIELDS: usize;

    /// Builds the record from exactly [`Self::FIELDS`] fields.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a field cannot be converted.
    fn from_fields(fields: &[&str]) -> Result<Self, ParseError>;

    /// Whether the record is selected by the user's `filter`.
    fn matches(&self, filter: &str) -> bool;
}

/// Why a line could not be turned into a record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line has fewer fields than the record needs.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields the record needs.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },

    /// The id field is not an integer.
    #[error("invalid id '{value}': {source}")]
    InvalidId {
        /// The offending field.
        value: String,
        /// The conversion failure.
        source: ParseIntError,
    },
}

/// Parses a record id. No whitespace is tolerated around the digits.
fn parse_id(value: &str) -> Result<i32, ParseError> {
    value.parse().map_err(|source| ParseError::InvalidId {
        value: value.to_string(),
        source,
    })
}
