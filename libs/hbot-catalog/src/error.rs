//! Catalog errors.

use thiserror::Error;

use crate::family::Family;

/// Errors raised while querying or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record is registered for this size name.
    #[error("unknown {family} size '{size}'")]
    UnknownSize {
        /// Family that was queried.
        family: Family,
        /// Requested size name.
        size: String,
    },

    /// A record was found but belongs to another family.
    #[error("expected a {expected} record, found a {found} record")]
    FamilyMismatch {
        /// Family the caller asked for.
        expected: Family,
        /// Family of the stored record.
        found: Family,
    },

    /// A record carries a negative or non-finite dimension.
    #[error("{family} '{size}' has invalid {field}: {value}")]
    InvalidRecord {
        /// Family of the record.
        family: Family,
        /// Size name of the record.
        size: String,
        /// Offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A catalog file could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_size_names_family_and_size() {
        let err = CatalogError::UnknownSize {
            family: Family::LinearBearing,
            size: "LM00XX".to_string(),
        };
        assert_eq!(err.to_string(), "unknown linear bearing size 'LM00XX'");
    }
}
